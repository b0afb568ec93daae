//! Release metadata of the tool itself.

/// Version of this release, without a leading `v`.
///
/// Builder images are tagged with this version so that the images always
/// match the tool that invokes them.
pub const RELEASE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The image tag matching [`RELEASE_VERSION`], e.g. `v0.1.0`.
pub fn image_tag() -> String {
    format!("v{RELEASE_VERSION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_is_prefixed_version() {
        assert_eq!(image_tag(), format!("v{}", env!("CARGO_PKG_VERSION")));
        assert!(!RELEASE_VERSION.starts_with('v'));
    }
}
