//! Tests for builder image resolution

use forge_meta::{RELEASE_VERSION, image_for_lang, is_supported, supported_langs};
use rstest::rstest;

#[rstest]
#[case("rust", "suborbital/builder-rs")]
#[case("swift", "suborbital/builder-swift")]
#[case("assemblyscript", "suborbital/builder-as")]
#[case("tinygo", "suborbital/builder-tinygo")]
fn test_known_lang_resolves_to_versioned_image(#[case] lang: &str, #[case] base: &str) {
    let image = image_for_lang(lang).unwrap();
    assert_eq!(image, format!("{base}:v{RELEASE_VERSION}"));
}

#[rstest]
#[case("cobol")]
#[case("grain")]
#[case("js")]
#[case("")]
fn test_unknown_lang_is_absent(#[case] lang: &str) {
    assert_eq!(image_for_lang(lang), None);
    assert!(!is_supported(lang));
}

#[test]
fn test_every_supported_lang_resolves() {
    for lang in supported_langs() {
        assert!(image_for_lang(lang).is_some(), "{lang} should resolve");
    }
}
