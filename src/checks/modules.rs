//! Module existence checks.

use std::path::Path;

use crate::fs::FileSystem;

use super::types::CheckResult;

/// Whether `<sources_root>/<name>` is a directory.
///
/// A missing sources root simply means no module exists.
pub fn module_exists(fs: &dyn FileSystem, sources_root: &Path, name: &str) -> bool {
    fs.is_dir(&sources_root.join(name))
}

/// Check every module, preserving the given order.
pub fn check_modules(
    fs: &dyn FileSystem,
    sources_root: &Path,
    modules: &[String],
) -> Vec<CheckResult> {
    modules
        .iter()
        .map(|name| CheckResult::new(name, module_exists(fs, sources_root, name)))
        .collect()
}
