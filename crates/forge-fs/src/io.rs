//! Read-side I/O helpers

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// File name of the entry (no directory component)
    pub name: String,
    /// Whether the entry itself is a directory. Symlinks are not followed.
    pub is_dir: bool,
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// List the entries of a directory, sorted by file name.
///
/// Entries whose names are not valid UTF-8 are converted lossily.
pub fn list_dir(dir: &NormalizedPath) -> Result<Vec<DirEntryInfo>> {
    let native_dir = dir.to_native();
    let entries = fs::read_dir(&native_dir).map_err(|e| Error::io(&native_dir, e))?;

    let mut listing = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&native_dir, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        listing.push(DirEntryInfo {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: file_type.is_dir(),
        });
    }

    listing.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(listing)
}
