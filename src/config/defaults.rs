//! Built-in checklist tables.
//!
//! These are the values used when no override file is present. Order
//! matters: modules and commands are reported in the order listed here.

/// Directory under the root holding one directory per module.
pub const SOURCES_DIR: &str = "Sources";

/// Directory under the root holding one test directory per module.
pub const TESTS_DIR: &str = "Tests";

/// Appended to a module name to get its test directory name.
pub const TEST_SUFFIX: &str = "Tests";

/// Extension a test directory must contain at least one of.
pub const TEST_EXTENSION: &str = "swift";

/// Documentation file searched for required commands.
pub const DOCS_FILE: &str = "Docs/NextSteps.md";

/// Where the report is written, relative to the root.
pub const OUTPUT_FILE: &str = "Docs/release_checklist.md";

/// Modules every release must ship.
pub const REQUIRED_MODULES: &[&str] = &[
    "CoreKit",
    "TelemetryKit",
    "QuotaKit",
    "AICore",
    "SyncKit",
    "StorageKit",
];

/// Commands that must be documented verbatim.
pub const REQUIRED_COMMANDS: &[&str] = &[
    "swift test",
    "xcodebuild test -project App/NobleNotesApp.xcodeproj -scheme NobleNotesApp",
];

/// Number of gate levels; tags run from `[GATE0]` up to `[GATE{n-1}]`.
pub const GATE_LEVELS: usize = 7;

/// Extensions read by the gate-tag scan.
pub const SCAN_EXTENSIONS: &[&str] = &["swift", "md", "txt"];

/// Top-level directories pruned from the gate-tag scan.
pub const EXCLUDED_DIRS: &[&str] = &[".git", ".build", ".swiftpm"];

/// The gate tags `[GATE0]` through `[GATE6]`.
pub fn gate_tags() -> Vec<String> {
    (0..GATE_LEVELS).map(|idx| format!("[GATE{}]", idx)).collect()
}

pub(crate) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
