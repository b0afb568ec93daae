//! Manifest schema and per-language build policy for wasm-forge.
//!
//! This crate provides the manifest types read from disk, the static
//! language-to-builder-image table and the per-OS prerequisite table.

pub mod error;
pub mod images;
pub mod os;
pub mod prereq;
pub mod release;
pub mod schema;

pub use error::{Error, Result};
pub use images::{image_for_lang, is_supported, supported_langs};
pub use os::Os;
pub use prereq::{Prereq, prereqs_for};
pub use release::RELEASE_VERSION;
pub use schema::{Directive, Runnable};
