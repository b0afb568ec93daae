//! Build context discovery for wasm-forge
//!
//! Given a working directory, this crate determines which directories are
//! buildable units, whether the working directory is itself a unit, whether
//! a previously built bundle exists, and which builder image each unit
//! needs. Every later command (build, bundle, push) consumes the resulting
//! [`BuildContext`].
//!
//! # Architecture
//!
//! ```text
//!                 BuildContext
//!                      |
//!        +-------------+-------------+
//!        |             |             |
//!     scanner        bundle      Directive
//!        |                      (forge-meta)
//!  runnable_from_entries
//!        |
//!  image_for_lang (forge-meta)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use forge_context::BuildContext;
//!
//! fn example() -> forge_context::Result<()> {
//!     let mut ctx = BuildContext::for_directory(".")?;
//!     ctx.set_build_langs(["rust", "tinygo"]);
//!
//!     for unit in ctx.runnables_to_build() {
//!         println!("{} -> {}", unit.name, unit.build_image);
//!     }
//!     Ok(())
//! }
//! ```

pub mod bundle;
pub mod context;
pub mod error;
pub mod module;
pub mod runnable_dir;
pub mod scanner;

pub use bundle::{BUNDLE_FILE_NAME, BundleRef};
pub use context::BuildContext;
pub use error::{Error, Result};
pub use module::ModuleFile;
pub use runnable_dir::RunnableDir;
pub use scanner::UnitScan;
