//! Unit manifest schema - loaded from `<unit>/.runnable.*`
//!
//! # Example YAML
//!
//! ```yaml
//! name: hello-echo
//! namespace: default
//! lang: rust
//! ```
//!
//! Every field is optional on disk. Unknown keys are ignored.

use serde::{Deserialize, Serialize};

/// File name prefix that marks a directory as a buildable unit.
pub const RUNNABLE_MANIFEST_PREFIX: &str = ".runnable.";

/// Namespace assigned to units that do not declare one.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Declared metadata of a buildable unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Runnable {
    /// Unit name; defaults to the directory's base name
    pub name: String,
    /// Namespace; defaults to [`DEFAULT_NAMESPACE`]
    pub namespace: String,
    /// Source language, e.g. `rust` or `tinygo`
    pub lang: String,
    /// Declared unit version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Declared module API version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Fully-qualified function name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fqfn: Option<String>,
}

impl Runnable {
    /// Fill in the name and namespace when they are missing or empty.
    ///
    /// `dir_name` is the base name of the directory holding the manifest.
    pub fn apply_defaults(&mut self, dir_name: &str) {
        if self.name.is_empty() {
            self.name = dir_name.to_string();
        }

        if self.namespace.is_empty() {
            self.namespace = DEFAULT_NAMESPACE.to_string();
        }
    }

    /// Check whether `file_name` is a unit manifest.
    pub fn is_manifest_file(file_name: &str) -> bool {
        file_name.starts_with(RUNNABLE_MANIFEST_PREFIX)
    }
}
