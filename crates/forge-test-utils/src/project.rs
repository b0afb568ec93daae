//! [`TestProject`] builder for build-context test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory with helper methods for test setup and
/// assertion.
///
/// # Example
///
/// ```rust,no_run
/// use forge_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.add_unit("hello-echo", "lang: rust\n");
/// project.add_unit("hello-go", "name: hello-go\nlang: tinygo\n");
/// project.assert_file_exists("hello-echo/.runnable.yaml");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create `dir` (relative to the root) and write `manifest` to its
    /// `.runnable.yaml`. Returns the unit directory.
    pub fn add_unit(&self, dir: &str, manifest: &str) -> PathBuf {
        self.add_unit_file(dir, ".runnable.yaml", manifest)
    }

    /// Like [`add_unit`](Self::add_unit) with an explicit manifest file name.
    pub fn add_unit_file(&self, dir: &str, file_name: &str, manifest: &str) -> PathBuf {
        let unit_dir = self.add_dir(dir);
        fs::write(unit_dir.join(file_name), manifest).unwrap_or_else(|e| {
            panic!("TestProject::add_unit_file: failed to write {dir}/{file_name}: {e}")
        });
        unit_dir
    }

    /// Write a unit manifest with only `name` and `lang` set.
    pub fn add_named_unit(&self, dir: &str, name: &str, lang: &str) -> PathBuf {
        self.add_unit(dir, &format!("name: {name}\nlang: {lang}\n"))
    }

    /// Write the project's own manifest, making the root itself a unit.
    pub fn make_root_unit(&self, manifest: &str) {
        fs::write(self.root().join(".runnable.yaml"), manifest)
            .unwrap_or_else(|e| panic!("TestProject::make_root_unit: {e}"));
    }

    /// Create a directory (and parents) relative to the root.
    pub fn add_dir(&self, dir: &str) -> PathBuf {
        let full_path = self.root().join(dir);
        fs::create_dir_all(&full_path)
            .unwrap_or_else(|e| panic!("TestProject::add_dir: failed to create {dir}: {e}"));
        full_path
    }

    /// Write `content` to `path` relative to the root, creating parents.
    pub fn write_file(&self, path: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("TestProject::write_file: failed to write {path}: {e}"));
        full_path
    }

    /// Assert that `path` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }
}

/// Whether the tests run as root, which bypasses permission checks.
///
/// Permission-denial tests skip themselves when this returns true.
pub fn is_root() -> bool {
    match std::process::Command::new("id").arg("-u").output() {
        Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
        Err(_) => false,
    }
}
