//! Locating the output bundle of a project

use forge_fs::NormalizedPath;

use crate::Result;

/// File name of the output bundle, placed in the working directory.
pub const BUNDLE_FILE_NAME: &str = "runnables.wasm.zip";

/// The bundle path of a project and whether a bundle existed at scan time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleRef {
    /// Always `<cwd>/runnables.wasm.zip`, whether or not it exists
    pub fullpath: NormalizedPath,
    /// Result of the existence check taken when the context was built
    pub exists: bool,
}

/// Compute the bundle path for `cwd` and check whether the bundle exists.
///
/// A missing bundle is not an error. Any other stat failure (for example a
/// permission error) is.
pub fn locate(cwd: &NormalizedPath) -> Result<BundleRef> {
    let fullpath = cwd.join(BUNDLE_FILE_NAME);
    let exists = fullpath.try_exists()?;

    tracing::debug!(path = %fullpath, exists, "located bundle");
    Ok(BundleRef { fullpath, exists })
}
