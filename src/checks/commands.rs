//! Documented command checks.

use std::path::Path;

use crate::error::Result;
use crate::fs::FileSystem;

use super::types::CheckResult;

/// Check which commands appear verbatim in the documentation file.
///
/// Matching is a plain substring search: no case folding, no whitespace
/// normalization, no word boundaries. A missing file marks every command
/// as undocumented. Duplicate commands are reported once, at their first
/// position.
///
/// # Errors
///
/// Fails if the file exists but cannot be read as UTF-8 text.
pub fn check_commands(
    fs: &dyn FileSystem,
    docs_file: &Path,
    commands: &[String],
) -> Result<Vec<CheckResult>> {
    let content = if fs.exists(docs_file) {
        Some(fs.read_to_string(docs_file)?)
    } else {
        tracing::debug!("{} not found; no commands documented", docs_file.display());
        None
    };

    let mut results: Vec<CheckResult> = Vec::with_capacity(commands.len());
    for cmd in commands {
        if results.iter().any(|r| &r.name == cmd) {
            continue;
        }
        let documented = content.as_deref().is_some_and(|text| text.contains(cmd.as_str()));
        results.push(CheckResult::new(cmd, documented));
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{strings, REQUIRED_COMMANDS};
    use crate::fs::MemoryFileSystem;

    const DOCS: &str = "/repo/Docs/NextSteps.md";

    #[test]
    fn missing_docs_marks_all_undocumented() {
        let fs = MemoryFileSystem::new();
        let results =
            check_commands(&fs, Path::new(DOCS), &strings(REQUIRED_COMMANDS)).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| !r.passed));
    }

    #[test]
    fn substring_inside_other_text_counts() {
        let fs = MemoryFileSystem::new();
        fs.add_file(DOCS, "Before shipping run `swift test --parallel` locally.");

        let results =
            check_commands(&fs, Path::new(DOCS), &strings(REQUIRED_COMMANDS)).unwrap();
        assert_eq!(results[0], CheckResult::pass("swift test"));
        assert!(!results[1].passed);
    }

    #[test]
    fn match_is_case_and_whitespace_sensitive() {
        let fs = MemoryFileSystem::new();
        fs.add_file(DOCS, "Swift Test\nswift  test\nswift\ntest");

        let results =
            check_commands(&fs, Path::new(DOCS), &["swift test".to_string()]).unwrap();
        assert!(!results[0].passed);
    }

    #[test]
    fn results_follow_declared_order() {
        let fs = MemoryFileSystem::new();
        fs.add_file(
            DOCS,
            "xcodebuild test -project App/NobleNotesApp.xcodeproj -scheme NobleNotesApp\n",
        );

        let results =
            check_commands(&fs, Path::new(DOCS), &strings(REQUIRED_COMMANDS)).unwrap();
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, REQUIRED_COMMANDS);
        assert!(!results[0].passed);
        assert!(results[1].passed);
    }

    #[test]
    fn duplicate_commands_reported_once() {
        let fs = MemoryFileSystem::new();
        fs.add_file(DOCS, "make");
        let commands = vec!["make".to_string(), "lint".to_string(), "make".to_string()];

        let results = check_commands(&fs, Path::new(DOCS), &commands).unwrap();
        assert_eq!(
            results,
            vec![CheckResult::pass("make"), CheckResult::fail("lint")]
        );
    }

    #[test]
    fn undecodable_docs_is_fatal() {
        let fs = MemoryFileSystem::new();
        fs.add_bytes(DOCS, &[0xff, 0xfe]);
        assert!(check_commands(&fs, Path::new(DOCS), &strings(REQUIRED_COMMANDS)).is_err());
    }
}
