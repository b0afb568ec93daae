//! A unit located on disk

use forge_fs::NormalizedPath;
use forge_meta::{Os, Prereq, Runnable};

use crate::Result;

/// A directory holding a buildable unit.
///
/// Created once while scanning and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnableDir {
    /// Unit name (from the manifest, or the directory name)
    pub name: String,
    /// `name` with hyphens replaced by underscores, usable as an identifier
    pub underscore_name: String,
    /// Absolute path of the unit directory
    pub fullpath: NormalizedPath,
    /// The manifest, with defaults applied
    pub runnable: Runnable,
    /// Builder image reference, e.g. `suborbital/builder-rs:v0.1.0`
    pub build_image: String,
}

impl RunnableDir {
    pub fn new(fullpath: NormalizedPath, runnable: Runnable, build_image: String) -> Self {
        Self {
            name: runnable.name.clone(),
            underscore_name: underscore_name(&runnable.name),
            fullpath,
            runnable,
            build_image,
        }
    }

    /// Source language of the unit.
    pub fn lang(&self) -> &str {
        &self.runnable.lang
    }

    /// Path of the unit's compiled module, `<fullpath>/<name>.wasm`.
    pub fn module_path(&self) -> NormalizedPath {
        self.fullpath.join(&format!("{}.wasm", self.name))
    }

    /// Prerequisites for building this unit on `os`.
    pub fn prereqs(&self, os: Os) -> &'static [Prereq] {
        os.prereqs(self.lang())
    }

    /// Prerequisites whose sentinel file is absent from the unit directory,
    /// in table order.
    pub fn missing_prereqs(&self, os: Os) -> Result<Vec<&'static Prereq>> {
        let mut missing = Vec::new();
        for prereq in self.prereqs(os) {
            if !self.fullpath.join(prereq.file).try_exists()? {
                missing.push(prereq);
            }
        }
        Ok(missing)
    }
}

fn underscore_name(name: &str) -> String {
    name.replace('-', "_")
}
