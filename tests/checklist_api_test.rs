//! Checklist API integration tests against real directory trees.

use std::fs;
use std::path::Path;

use relcheck::checks::{check_commands, module_exists, tests_exist, Checklist, GateScanner};
use relcheck::config::ChecklistConfig;
use relcheck::fs::OsFileSystem;
use relcheck::report::{write_report, MarkdownFormatter};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn scenario_report_through_the_library() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("Sources/CoreKit")).unwrap();
    write(root, "Tests/CoreKitTests/Foo.swift", "import XCTest\n");
    write(root, "Docs/NextSteps.md", "swift test");
    write(root, "Notes.md", "first\nsecond\n  [GATE3] fix this  \n");

    let config = ChecklistConfig::default();
    let checklist = Checklist::collect(&OsFileSystem, root, &config).unwrap();
    let markdown = MarkdownFormatter::new(&config.gate_tags).render(&checklist);

    assert!(markdown.starts_with("# Release Checklist\n\n## Required Modules\n- ✅ CoreKit\n"));
    assert!(markdown.contains("- ✅ CoreKitTests\n- ❌ TelemetryKitTests\n"));
    assert!(markdown.contains("- ✅ `swift test`\n- ❌ `xcodebuild test"));
    assert!(
        markdown.ends_with("## TODO Markers [GATE0]..[GATE6]\n- Notes.md:3 [GATE3] fix this\n")
    );

    let output = config.output_path(root);
    write_report(&OsFileSystem, &output, &markdown).unwrap();
    assert_eq!(fs::read_to_string(output).unwrap(), markdown);
}

#[test]
fn report_is_stable_after_being_written() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "Sources/CoreKit/a.swift", "// [GATE1] wire telemetry\n");

    let config = ChecklistConfig::default();
    let render = || {
        let checklist = Checklist::collect(&OsFileSystem, root, &config).unwrap();
        MarkdownFormatter::new(&config.gate_tags).render(&checklist)
    };

    let first = render();
    write_report(&OsFileSystem, &config.output_path(root), &first).unwrap();
    assert_eq!(render(), first);
}

#[test]
fn git_directory_is_never_scanned() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, ".git/hooks/note.md", "[GATE1] internal");
    write(root, "Docs/Plan.md", "[GATE1] public");

    let config = ChecklistConfig::default();
    let findings = GateScanner::new(
        config.gate_tags.clone(),
        config.scan_extensions.clone(),
        config.excluded_dirs.clone(),
    )
    .scan(&OsFileSystem, root)
    .unwrap();

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].location(), "Docs/Plan.md:1");
}

#[test]
fn individual_checks_are_usable() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "Sources/CoreKit", "not a directory");
    fs::create_dir_all(root.join("Tests/SyncKitTests/Nested")).unwrap();
    write(root, "Tests/SyncKitTests/Nested/Deep.swift", "");

    assert!(!module_exists(&OsFileSystem, &root.join("Sources"), "CoreKit"));
    assert!(!tests_exist(&OsFileSystem, &root.join("Tests/SyncKitTests"), "swift").unwrap());

    let commands = vec!["swift test".to_string()];
    let docs = root.join("Docs/NextSteps.md");
    let results = check_commands(&OsFileSystem, &docs, &commands).unwrap();
    assert_eq!(results.len(), 1);
    assert!(!results[0].passed);
}
