//! Builder image lookup by source language
//!
//! Every supported language is compiled inside its own builder image. The
//! table below is fixed at build time; the tag is always the tool's own
//! release version.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::release;

/// Base builder image (without tag) for each supported language.
static BUILDER_IMAGES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("rust", "suborbital/builder-rs"),
        ("swift", "suborbital/builder-swift"),
        ("assemblyscript", "suborbital/builder-as"),
        ("tinygo", "suborbital/builder-tinygo"),
    ])
});

/// Resolve the builder image reference for `lang`.
///
/// Returns `<base-image>:v<release-version>`, or `None` when the language
/// is not supported. Callers decide whether an unsupported language is
/// fatal.
///
/// # Example
///
/// ```
/// use forge_meta::{RELEASE_VERSION, image_for_lang};
///
/// let image = image_for_lang("rust").unwrap();
/// assert_eq!(image, format!("suborbital/builder-rs:v{RELEASE_VERSION}"));
/// assert!(image_for_lang("cobol").is_none());
/// ```
pub fn image_for_lang(lang: &str) -> Option<String> {
    BUILDER_IMAGES
        .get(lang)
        .map(|base| format!("{base}:{}", release::image_tag()))
}

/// Check whether a builder image exists for `lang`.
pub fn is_supported(lang: &str) -> bool {
    BUILDER_IMAGES.contains_key(lang)
}

/// List all supported languages, sorted alphabetically.
pub fn supported_langs() -> Vec<&'static str> {
    let mut langs: Vec<_> = BUILDER_IMAGES.keys().copied().collect();
    langs.sort();
    langs
}
