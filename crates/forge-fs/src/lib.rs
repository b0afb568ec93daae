//! Filesystem abstraction for wasm-forge
//!
//! Provides normalized path handling, directory listing, existence probes
//! and format-agnostic manifest decoding.

pub mod error;
pub mod io;
pub mod path;
pub mod store;

pub use error::{Error, Result};
pub use io::DirEntryInfo;
pub use path::NormalizedPath;
pub use store::{ManifestFormat, ManifestStore};
