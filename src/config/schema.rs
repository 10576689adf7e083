//! Configuration schema for the checklist.
//!
//! Maps to the optional `.relcheck.yml` override file. Every field is
//! optional in YAML; missing fields fall back to [`super::defaults`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::defaults;

/// Root configuration structure for `.relcheck.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistConfig {
    /// Directory holding one directory per module
    pub sources_dir: PathBuf,

    /// Directory holding one test directory per module
    pub tests_dir: PathBuf,

    /// Suffix appended to module names for test directories
    pub test_suffix: String,

    /// Extension that marks a test source file
    pub test_extension: String,

    /// Documentation file that must mention every required command
    pub docs_file: PathBuf,

    /// Report output path
    pub output: PathBuf,

    /// Required modules, in report order
    pub modules: Vec<String>,

    /// Required commands, in report order
    pub commands: Vec<String>,

    /// Literal gate tags to look for
    pub gate_tags: Vec<String>,

    /// Extensions read by the gate scan
    pub scan_extensions: Vec<String>,

    /// Top-level directories never scanned
    pub excluded_dirs: Vec<String>,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            sources_dir: PathBuf::from(defaults::SOURCES_DIR),
            tests_dir: PathBuf::from(defaults::TESTS_DIR),
            test_suffix: defaults::TEST_SUFFIX.to_string(),
            test_extension: defaults::TEST_EXTENSION.to_string(),
            docs_file: PathBuf::from(defaults::DOCS_FILE),
            output: PathBuf::from(defaults::OUTPUT_FILE),
            modules: defaults::strings(defaults::REQUIRED_MODULES),
            commands: defaults::strings(defaults::REQUIRED_COMMANDS),
            gate_tags: defaults::gate_tags(),
            scan_extensions: defaults::strings(defaults::SCAN_EXTENSIONS),
            excluded_dirs: defaults::strings(defaults::EXCLUDED_DIRS),
        }
    }
}

impl ChecklistConfig {
    /// Resolve the report path against the project root.
    ///
    /// Absolute output paths are returned as-is.
    pub fn output_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.output)
    }

    /// Strip leading dots so `.md` and `md` mean the same thing.
    pub(crate) fn normalize(mut self) -> Self {
        self.test_extension = strip_dot(&self.test_extension);
        self.scan_extensions = self.scan_extensions.iter().map(|e| strip_dot(e)).collect();
        self
    }
}

fn strip_dot(ext: &str) -> String {
    ext.trim_start_matches('.').to_string()
}
