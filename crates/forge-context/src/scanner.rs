//! Discovery of buildable units
//!
//! A unit is a directory holding a `.runnable.*` manifest. Discovery looks
//! at the working directory first: if it is a unit, it is the only one and
//! nothing below it is examined. Otherwise each immediate subdirectory is
//! checked, one level deep.

use forge_fs::{DirEntryInfo, ManifestStore, NormalizedPath, io};
use forge_meta::{Runnable, image_for_lang};

use crate::{Error, Result, RunnableDir};

/// Outcome of scanning a working directory for units.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnitScan {
    /// Units in directory listing order (sorted by directory name)
    pub runnables: Vec<RunnableDir>,
    /// True when the working directory is itself a unit
    pub cwd_is_runnable: bool,
}

/// Scan `cwd` for units.
///
/// Fatal: `cwd` cannot be listed, or any manifest fails to load. A
/// subdirectory that cannot be listed is skipped with a warning.
pub fn scan(cwd: &NormalizedPath) -> Result<UnitScan> {
    let entries = io::list_dir(cwd)?;

    let cwd_unit =
        runnable_from_entries(cwd, &entries).map_err(|e| Error::scan(cwd.to_native(), e))?;
    if let Some(unit) = cwd_unit {
        tracing::debug!(name = %unit.name, "working directory is a runnable");
        return Ok(UnitScan {
            runnables: vec![unit],
            cwd_is_runnable: true,
        });
    }

    let mut runnables = Vec::new();

    for entry in entries.iter().filter(|e| e.is_dir) {
        let dir = cwd.join(&entry.name);

        let inner = match io::list_dir(&dir) {
            Ok(inner) => inner,
            Err(e) => {
                tracing::warn!("couldn't read files in {}: {}", dir, e);
                continue;
            }
        };

        match runnable_from_entries(&dir, &inner) {
            Ok(Some(unit)) => {
                tracing::debug!(name = %unit.name, lang = %unit.lang(), "found runnable");
                runnables.push(unit);
            }
            Ok(None) => {}
            Err(e) => return Err(Error::scan(dir.to_native(), e)),
        }
    }

    Ok(UnitScan {
        runnables,
        cwd_is_runnable: false,
    })
}

/// Find the manifest file among `entries`, if any.
///
/// The first matching file in listing order wins.
pub fn find_manifest(entries: &[DirEntryInfo]) -> Option<&str> {
    entries
        .iter()
        .find(|e| !e.is_dir && Runnable::is_manifest_file(&e.name))
        .map(|e| e.name.as_str())
}

/// Load the unit in `dir`, given the directory's listing.
///
/// Returns `Ok(None)` when `dir` holds no manifest. A manifest that cannot
/// be read or parsed, or that names an unsupported language, is an error.
pub fn runnable_from_entries(
    dir: &NormalizedPath,
    entries: &[DirEntryInfo],
) -> Result<Option<RunnableDir>> {
    let Some(file_name) = find_manifest(entries) else {
        return Ok(None);
    };

    let mut runnable: Runnable = ManifestStore::new().load(&dir.join(file_name))?;

    let fullpath = NormalizedPath::absolute(dir.to_native())?;
    let dir_name = fullpath.file_name().unwrap_or(fullpath.as_str()).to_string();
    runnable.apply_defaults(&dir_name);

    let Some(build_image) = image_for_lang(&runnable.lang) else {
        return Err(Error::UnsupportedLang {
            name: runnable.name,
            lang: runnable.lang,
        });
    };

    Ok(Some(RunnableDir::new(fullpath, runnable, build_image)))
}
