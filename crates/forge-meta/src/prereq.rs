//! Per-OS, per-language build prerequisites
//!
//! Some languages need files that the builder image expects to find in the
//! unit directory (a `node_modules` tree, a vendored library). Each entry
//! pairs the sentinel path whose absence means the prerequisite is missing
//! with the shell command that produces it. This module is policy data
//! only: it never touches the filesystem or runs anything.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::Os;

/// A prerequisite file and the command that acquires it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prereq {
    /// Sentinel path, relative to the unit directory
    pub file: &'static str,
    /// Shell command, run from the unit directory, that creates `file`
    pub command: &'static str,
}

const NONE: &[Prereq] = &[];

const NODE_MODULES: &[Prereq] = &[Prereq {
    file: "node_modules",
    command: "npm install --include=dev",
}];

const GRAIN_DARWIN: &[Prereq] = &[
    Prereq {
        file: "_lib",
        command: "mkdir _lib",
    },
    Prereq {
        file: "_lib/_lib.tar.gz",
        command: "curl -L https://github.com/suborbital/reactr/archive/v0.13.0.tar.gz -o _lib/_lib.tar.gz",
    },
    Prereq {
        file: "_lib/suborbital",
        command: "tar --strip-components=3 -C _lib -xvzf _lib/_lib.tar.gz **/api/grain/suborbital/*",
    },
];

// GNU tar needs --wildcards to match the member pattern.
const GRAIN_LINUX: &[Prereq] = &[
    Prereq {
        file: "_lib",
        command: "mkdir _lib",
    },
    Prereq {
        file: "_lib/_lib.tar.gz",
        command: "curl -L https://github.com/suborbital/reactr/archive/v0.13.0.tar.gz -o _lib/_lib.tar.gz",
    },
    Prereq {
        file: "_lib/suborbital",
        command: "tar --wildcards --strip-components=3 -C _lib -xvzf _lib/_lib.tar.gz **/api/grain/suborbital/*",
    },
];

type LangTable = HashMap<&'static str, &'static [Prereq]>;

static PREREQUISITES: LazyLock<HashMap<&'static str, LangTable>> = LazyLock::new(|| {
    HashMap::from([
        (
            Os::MacOs.as_str(),
            HashMap::from([
                ("rust", NONE),
                ("swift", NONE),
                ("grain", GRAIN_DARWIN),
                ("assemblyscript", NODE_MODULES),
                ("tinygo", NONE),
                ("js", NODE_MODULES),
            ]),
        ),
        (
            Os::Linux.as_str(),
            HashMap::from([
                ("rust", NONE),
                ("swift", NONE),
                ("grain", GRAIN_LINUX),
                ("assemblyscript", NODE_MODULES),
                ("tinygo", NONE),
                ("js", NODE_MODULES),
            ]),
        ),
    ])
});

/// Look up the ordered prerequisites for `lang` on the OS named `os`.
///
/// An unknown OS or language yields an empty slice: no known
/// prerequisites, not an error.
pub fn prereqs_for(os: &str, lang: &str) -> &'static [Prereq] {
    PREREQUISITES
        .get(os)
        .and_then(|langs| langs.get(lang))
        .copied()
        .unwrap_or(NONE)
}

impl Os {
    /// Prerequisites for `lang` on this OS.
    pub fn prereqs(&self, lang: &str) -> &'static [Prereq] {
        prereqs_for(self.as_str(), lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grain_prereqs_are_ordered() {
        let files: Vec<_> = prereqs_for("linux", "grain").iter().map(|p| p.file).collect();
        assert_eq!(files, vec!["_lib", "_lib/_lib.tar.gz", "_lib/suborbital"]);
    }

    #[test]
    fn linux_tar_uses_wildcards() {
        assert!(prereqs_for("linux", "grain")[2].command.contains("--wildcards"));
        assert!(!prereqs_for("darwin", "grain")[2].command.contains("--wildcards"));
    }

    #[test]
    fn os_method_matches_free_function() {
        assert_eq!(Os::MacOs.prereqs("js"), prereqs_for("darwin", "js"));
    }
}
