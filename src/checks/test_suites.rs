//! Test suite existence checks.
//!
//! A module's suite lives in `<tests_root>/<Module><suffix>/` and counts only
//! if that directory directly contains a file with the test extension.

use std::path::Path;

use crate::error::Result;
use crate::fs::FileSystem;

use super::types::CheckResult;

/// Whether `dir` directly contains an entry with `extension`.
///
/// Returns `Ok(false)` when the directory is missing. Subdirectories are
/// not searched and file contents are never read.
pub fn tests_exist(fs: &dyn FileSystem, dir: &Path, extension: &str) -> Result<bool> {
    if !fs.is_dir(dir) {
        return Ok(false);
    }
    let entries = fs.read_dir(dir)?;
    Ok(entries.iter().any(|e| e.extension() == Some(extension)))
}

/// Check the test suite of every module, preserving order.
///
/// Result names are test directory names, e.g. `CoreKitTests`.
pub fn check_test_suites(
    fs: &dyn FileSystem,
    tests_root: &Path,
    modules: &[String],
    suffix: &str,
    extension: &str,
) -> Result<Vec<CheckResult>> {
    modules
        .iter()
        .map(|module| {
            let dir_name = format!("{}{}", module, suffix);
            let passed = tests_exist(fs, &tests_root.join(&dir_name), extension)?;
            Ok(CheckResult::new(&dir_name, passed))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{MemoryFileSystem, OsFileSystem};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn directory_with_source_file_passes() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("Tests/CoreKitTests");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Foo.swift"), "").unwrap();

        assert!(tests_exist(&OsFileSystem, &dir, "swift").unwrap());
    }

    #[test]
    fn missing_directory_fails_quietly() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("Tests/CoreKitTests");
        assert!(!tests_exist(&OsFileSystem, &dir, "swift").unwrap());
    }

    #[test]
    fn only_non_source_files_fails() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/repo/Tests/CoreKitTests/notes.txt", "");
        fs.add_file("/repo/Tests/CoreKitTests/README.md", "");

        assert!(!tests_exist(&fs, Path::new("/repo/Tests/CoreKitTests"), "swift").unwrap());
    }

    #[test]
    fn empty_directory_fails() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/repo/Tests/CoreKitTests");
        assert!(!tests_exist(&fs, Path::new("/repo/Tests/CoreKitTests"), "swift").unwrap());
    }

    #[test]
    fn nested_source_file_does_not_count() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/repo/Tests/CoreKitTests/Unit/Foo.swift", "");
        assert!(!tests_exist(&fs, Path::new("/repo/Tests/CoreKitTests"), "swift").unwrap());
    }

    #[test]
    fn extension_is_case_sensitive() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/repo/Tests/CoreKitTests/Foo.SWIFT", "");
        assert!(!tests_exist(&fs, Path::new("/repo/Tests/CoreKitTests"), "swift").unwrap());
    }

    #[test]
    fn file_in_place_of_directory_fails() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/repo/Tests/CoreKitTests", "");
        assert!(!tests_exist(&fs, Path::new("/repo/Tests/CoreKitTests"), "swift").unwrap());
    }

    #[test]
    fn suites_are_named_with_suffix_in_order() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/repo/Tests/QuotaKitTests/QuotaTests.swift", "");

        let modules = vec!["CoreKit".to_string(), "QuotaKit".to_string()];
        let results =
            check_test_suites(&fs, Path::new("/repo/Tests"), &modules, "Tests", "swift").unwrap();
        assert_eq!(
            results,
            vec![
                CheckResult::fail("CoreKitTests"),
                CheckResult::pass("QuotaKitTests"),
            ]
        );
    }
}
