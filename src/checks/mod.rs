//! Release readiness checks.
//!
//! Four independent checks run against the repository:
//! - [`modules`] - required module directories exist
//! - [`test_suites`] - each module has a test directory with test sources
//! - [`commands`] - required commands appear in the documentation file
//! - [`gates`] - lines tagged with gate markers across the tree
//!
//! [`Checklist::collect`] runs all of them with one configuration.

pub mod commands;
pub mod gates;
pub mod modules;
pub mod test_suites;
pub mod types;

use std::path::Path;

use serde::Serialize;

use crate::config::ChecklistConfig;
use crate::error::Result;
use crate::fs::FileSystem;

pub use commands::check_commands;
pub use gates::GateScanner;
pub use modules::{check_modules, module_exists};
pub use test_suites::{check_test_suites, tests_exist};
pub use types::{CheckResult, GateFinding};

/// Results of every check for one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checklist {
    /// Module existence, in declared order.
    pub modules: Vec<CheckResult>,

    /// Test suite existence, in declared order.
    pub tests: Vec<CheckResult>,

    /// Command documentation, in declared order.
    pub commands: Vec<CheckResult>,

    /// Gate tag findings, in traversal order.
    pub gates: Vec<GateFinding>,
}

impl Checklist {
    /// Run all checks against `project_root`.
    ///
    /// # Errors
    ///
    /// Missing inputs are not errors. Unreadable directories or files are.
    pub fn collect(
        fs: &dyn FileSystem,
        project_root: &Path,
        config: &ChecklistConfig,
    ) -> Result<Self> {
        let modules = check_modules(fs, &project_root.join(&config.sources_dir), &config.modules);
        let tests = check_test_suites(
            fs,
            &project_root.join(&config.tests_dir),
            &config.modules,
            &config.test_suffix,
            &config.test_extension,
        )?;
        let commands = check_commands(fs, &project_root.join(&config.docs_file), &config.commands)?;
        let gates = GateScanner::new(
            config.gate_tags.clone(),
            config.scan_extensions.clone(),
            config.excluded_dirs.clone(),
        )
        .ignore_file(config.output_path(project_root))
        .scan(fs, project_root)?;

        tracing::debug!(
            "Checked {} modules, {} test suites, {} commands; {} gate markers",
            modules.len(),
            tests.len(),
            commands.len(),
            gates.len()
        );

        Ok(Self {
            modules,
            tests,
            commands,
            gates,
        })
    }

    /// Whether every check passed and no gate markers remain.
    pub fn is_ready(&self) -> bool {
        self.failures().next().is_none() && self.gates.is_empty()
    }

    /// All failing checks across modules, tests, and commands.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.modules
            .iter()
            .chain(&self.tests)
            .chain(&self.commands)
            .filter(|r| !r.passed)
    }
}

/// Count of passing results.
pub fn passed_count(results: &[CheckResult]) -> usize {
    results.iter().filter(|r| r.passed).count()
}
