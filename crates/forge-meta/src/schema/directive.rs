//! Application directive schema - loaded from `Directive.yaml`
//!
//! The directive aggregates the units of an application and pins the
//! runtime version the application targets. It is optional: a project
//! without one is still a valid build context.
//!
//! # Example YAML
//!
//! ```yaml
//! identifier: com.example.app
//! appVersion: v0.1.0
//! atmoVersion: v0.4.2
//! runnables:
//!   - name: hello-echo
//!     namespace: default
//!     lang: rust
//! ```

use forge_fs::{ManifestStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use super::Runnable;
use crate::Result;

/// Candidate directive file names, in lookup order.
pub const DIRECTIVE_FILE_NAMES: &[&str] = &["Directive.yaml", "Directive.yml"];

/// Top-level application directive
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Directive {
    /// Reverse-DNS application identifier
    pub identifier: String,
    /// Application version
    pub app_version: String,
    /// Runtime version the application is built for
    pub atmo_version: String,
    /// Units declared by the application
    pub runnables: Vec<Runnable>,
}

impl Directive {
    /// Load the directive from `dir`, if one exists.
    ///
    /// A missing directive is `Ok(None)`; a directive that exists but cannot
    /// be read or parsed is an error.
    pub fn load(dir: &NormalizedPath) -> Result<Option<Self>> {
        for file_name in DIRECTIVE_FILE_NAMES {
            let path = dir.join(file_name);
            if !path.try_exists()? {
                continue;
            }

            tracing::debug!(path = %path, "loading directive");
            let directive = ManifestStore::new().load(&path)?;
            return Ok(Some(directive));
        }

        tracing::debug!(dir = %dir, "no directive found");
        Ok(None)
    }

    /// The targeted runtime version, if the directive declares one.
    pub fn runtime_version(&self) -> Option<&str> {
        Some(self.atmo_version.as_str()).filter(|v| !v.is_empty())
    }
}
