//! Error types for forge-context

use std::path::PathBuf;

/// Result type for forge-context operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort build context discovery
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A unit declares a language with no builder image
    #[error("({name}) {lang} is not a supported lang")]
    UnsupportedLang { name: String, lang: String },

    /// Discovery failed for a specific directory
    #[error("failed to read runnable in {path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    /// One assembly stage of the build context failed
    #[error("failed to {stage}: {source}")]
    Stage {
        stage: &'static str,
        #[source]
        source: Box<Error>,
    },

    /// A unit's compiled module could not be opened
    #[error("failed to open module file {path}: {source}")]
    ModuleOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from forge-fs
    #[error(transparent)]
    Fs(#[from] forge_fs::Error),

    /// Metadata error from forge-meta
    #[error(transparent)]
    Meta(#[from] forge_meta::Error),
}

impl Error {
    pub fn scan(path: impl Into<PathBuf>, source: impl Into<Error>) -> Self {
        Self::Scan {
            path: path.into(),
            source: Box::new(source.into()),
        }
    }

    pub fn stage(stage: &'static str, source: impl Into<Error>) -> Self {
        Self::Stage {
            stage,
            source: Box::new(source.into()),
        }
    }

    /// Walk through `Scan` and `Stage` wrappers to the underlying error.
    pub fn root_cause(&self) -> &Error {
        match self {
            Self::Scan { source, .. } | Self::Stage { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
