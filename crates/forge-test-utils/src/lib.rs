//! Shared test utilities for the wasm-forge workspace.
//!
//! This crate provides standardised on-disk fixtures to eliminate
//! duplication across crate test suites. It is a dev-dependency only and is
//! never published.
//!
//! # Modules
//!
//! - [`project`] - [`TestProject`](project::TestProject) builder for project directories holding units

pub mod project;

pub use project::{TestProject, is_root};
