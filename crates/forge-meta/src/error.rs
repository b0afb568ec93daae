//! Error types for forge-meta

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] forge_fs::Error),

    #[error("Unknown operating system: {os}")]
    UnknownOs { os: String },
}
