//! Error types for forge-fs

use std::path::PathBuf;

/// Result type for forge-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in forge-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} manifest at {path}: {message}")]
    ManifestParse {
        path: PathBuf,
        format: String,
        message: String,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when this is an I/O error whose kind is `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
