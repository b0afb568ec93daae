//! Tests for manifest schema parsing and directive loading

use forge_fs::NormalizedPath;
use forge_meta::{Directive, Runnable};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Runnable Tests
// ============================================================================

#[test]
fn test_parse_runnable_full() {
    let yaml = r#"
name: hello-echo
namespace: api
lang: rust
version: v0.1.0
apiVersion: 0.12.0
fqfn: api#hello-echo@v0.1.0
"#;

    let runnable: Runnable = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(runnable.name, "hello-echo");
    assert_eq!(runnable.namespace, "api");
    assert_eq!(runnable.lang, "rust");
    assert_eq!(runnable.version.as_deref(), Some("v0.1.0"));
    assert_eq!(runnable.api_version.as_deref(), Some("0.12.0"));
    assert_eq!(runnable.fqfn.as_deref(), Some("api#hello-echo@v0.1.0"));
}

#[test]
fn test_parse_runnable_minimal() {
    let runnable: Runnable = serde_yaml::from_str("lang: tinygo").unwrap();
    assert_eq!(runnable.name, "");
    assert_eq!(runnable.namespace, "");
    assert_eq!(runnable.lang, "tinygo");
    assert!(runnable.version.is_none());
}

#[test]
fn test_parse_runnable_ignores_unknown_keys() {
    let yaml = "name: x\nlang: swift\ncapabilities:\n  http: true\n";
    let runnable: Runnable = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(runnable.name, "x");
}

#[test]
fn test_parse_runnable_toml() {
    let runnable: Runnable = toml::from_str("name = \"x\"\nlang = \"rust\"").unwrap();
    assert_eq!(runnable.lang, "rust");
}

#[test]
fn test_parse_runnable_wrong_type_fails() {
    let result: Result<Runnable, _> = serde_yaml::from_str("name: [1, 2]\nlang: rust");
    assert!(result.is_err());
}

// ============================================================================
// Directive Tests
// ============================================================================

#[test]
fn test_directive_absent_is_none() {
    let temp = TempDir::new().unwrap();
    let directive = Directive::load(&NormalizedPath::new(temp.path())).unwrap();
    assert!(directive.is_none());
}

#[test]
fn test_directive_yaml_loaded() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("Directive.yaml"),
        r#"
identifier: com.example.app
appVersion: v0.1.0
atmoVersion: v0.4.2
runnables:
  - name: hello-echo
    namespace: default
    lang: rust
"#,
    )
    .unwrap();

    let directive = Directive::load(&NormalizedPath::new(temp.path()))
        .unwrap()
        .expect("directive should be loaded");

    assert_eq!(directive.identifier, "com.example.app");
    assert_eq!(directive.app_version, "v0.1.0");
    assert_eq!(directive.runtime_version(), Some("v0.4.2"));
    assert_eq!(directive.runnables.len(), 1);
    assert_eq!(directive.runnables[0].name, "hello-echo");
}

#[test]
fn test_directive_yml_fallback() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Directive.yml"), "identifier: com.example.yml\n").unwrap();

    let directive = Directive::load(&NormalizedPath::new(temp.path()))
        .unwrap()
        .unwrap();

    assert_eq!(directive.identifier, "com.example.yml");
    assert_eq!(directive.runtime_version(), None);
}

#[test]
fn test_directive_yaml_preferred_over_yml() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Directive.yaml"), "identifier: from-yaml\n").unwrap();
    fs::write(temp.path().join("Directive.yml"), "identifier: from-yml\n").unwrap();

    let directive = Directive::load(&NormalizedPath::new(temp.path()))
        .unwrap()
        .unwrap();

    assert_eq!(directive.identifier, "from-yaml");
}

#[test]
fn test_directive_malformed_is_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Directive.yaml"), "runnables: {{{").unwrap();

    let result = Directive::load(&NormalizedPath::new(temp.path()));

    let message = result.unwrap_err().to_string();
    assert!(message.contains("Directive.yaml"), "got: {message}");
}
