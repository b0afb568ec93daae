use forge_fs::{DirEntryInfo, NormalizedPath, io};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_read_text() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("notes.txt");
    fs::write(&file_path, "hello world").unwrap();

    let content = io::read_text(&NormalizedPath::new(&file_path)).unwrap();
    assert_eq!(content, "hello world");
}

#[test]
fn test_list_dir_is_sorted_and_flags_directories() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("zeta")).unwrap();
    fs::create_dir(temp.path().join("alpha")).unwrap();
    fs::write(temp.path().join("middle.txt"), "").unwrap();

    let listing = io::list_dir(&NormalizedPath::new(temp.path())).unwrap();

    assert_eq!(
        listing,
        vec![
            DirEntryInfo { name: "alpha".into(), is_dir: true },
            DirEntryInfo { name: "middle.txt".into(), is_dir: false },
            DirEntryInfo { name: "zeta".into(), is_dir: true },
        ]
    );
}

#[test]
fn test_list_dir_empty() {
    let temp = TempDir::new().unwrap();
    let listing = io::list_dir(&NormalizedPath::new(temp.path())).unwrap();
    assert!(listing.is_empty());
}

#[test]
fn test_list_dir_missing_directory_is_not_found() {
    let temp = TempDir::new().unwrap();
    let err = io::list_dir(&NormalizedPath::new(temp.path().join("missing"))).unwrap_err();
    assert!(err.is_not_found(), "expected not-found, got: {err}");
}

#[test]
fn test_try_exists_true_for_existing_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("runnables.wasm.zip");
    fs::write(&file_path, b"PK").unwrap();

    assert!(NormalizedPath::new(&file_path).try_exists().unwrap());
}
