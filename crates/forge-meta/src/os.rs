//! Host operating system identification

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Host operating systems that carry a prerequisite policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    Linux,
    MacOs,
}

impl Os {
    /// Detect the current operating system at runtime.
    ///
    /// Returns `None` on hosts without a prerequisite policy.
    pub fn current() -> Option<Self> {
        std::env::consts::OS.parse().ok()
    }

    /// The identifier used as the prerequisite table key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::MacOs => "darwin",
        }
    }
}

impl FromStr for Os {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "linux" => Ok(Self::Linux),
            "darwin" | "macos" => Ok(Self::MacOs),
            _ => Err(Error::UnknownOs { os: s.to_string() }),
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
