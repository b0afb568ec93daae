//! Opening the compiled modules of discovered units

use std::fs::File;

use forge_fs::NormalizedPath;

use crate::{Error, Result, RunnableDir};

/// An open handle to a unit's compiled `.wasm` module.
///
/// The handle is closed when the value is dropped.
#[derive(Debug)]
pub struct ModuleFile {
    /// Name of the unit the module belongs to
    pub name: String,
    /// Path of the opened file
    pub path: NormalizedPath,
    /// The open file handle
    pub file: File,
}

impl ModuleFile {
    /// Open the compiled module of `unit`.
    pub fn open(unit: &RunnableDir) -> Result<Self> {
        let path = unit.module_path();
        let file = File::open(path.to_native()).map_err(|source| Error::ModuleOpen {
            path: path.to_native(),
            source,
        })?;

        Ok(Self {
            name: unit.name.clone(),
            path,
            file,
        })
    }

    /// Give up the wrapper and keep only the file handle.
    pub fn into_file(self) -> File {
        self.file
    }
}

/// Open the module of every unit, in order.
///
/// On the first failure, every handle opened so far is closed before the
/// error is returned.
pub fn open_all<'a>(units: impl IntoIterator<Item = &'a RunnableDir>) -> Result<Vec<ModuleFile>> {
    units.into_iter().map(ModuleFile::open).collect()
}
