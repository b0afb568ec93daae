//! Schema definitions for unit manifests and the top-level directive
//!
//! - `<unit>/.runnable.yaml` - one buildable unit ([`Runnable`])
//! - `Directive.yaml` - optional application directive ([`Directive`])

pub mod directive;
pub mod runnable;

pub use directive::{DIRECTIVE_FILE_NAMES, Directive};
pub use runnable::{DEFAULT_NAMESPACE, RUNNABLE_MANIFEST_PREFIX, Runnable};
