//! Generate command implementation.
//!
//! The `relcheck generate` command (and bare `relcheck`) runs every check,
//! writes the Markdown checklist, and prints a short summary.

use std::path::{Path, PathBuf};

use crate::checks::{passed_count, CheckResult, Checklist};
use crate::cli::args::GenerateArgs;
use crate::config::{load_config, ChecklistConfig};
use crate::error::Result;
use crate::fs::{FileSystem, OsFileSystem};
use crate::report::{
    format_check, write_report, JsonFormatter, MarkdownFormatter, ReportFormatter,
};
use crate::ui::{StatusKind, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The generate command implementation.
pub struct GenerateCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: GenerateArgs,
}

impl GenerateCommand {
    /// Create a new generate command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: GenerateArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Run against an explicit filesystem.
    pub fn run(&self, fs: &dyn FileSystem, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let loaded = load_config(&self.project_root, self.config_path.as_deref());
        let (mut config, _source) = match loaded {
            Ok(loaded) => loaded,
            Err(e) if e.is_config_error() => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };
        if let Some(output) = &self.args.output {
            config.output = output.clone();
        }

        let checklist = Checklist::collect(fs, &self.project_root, &config)?;
        let markdown = MarkdownFormatter::new(&config.gate_tags).render(&checklist);

        if self.args.dry_run {
            if !self.args.json {
                ui.message(markdown.trim_end_matches('\n'));
            }
        } else {
            write_report(fs, &config.output_path(&self.project_root), &markdown)?;
        }

        if self.args.json {
            let mut output = Vec::new();
            JsonFormatter::new().format(&checklist, &mut output)?;
            ui.message(String::from_utf8_lossy(&output).trim_end());
        } else if !self.args.dry_run {
            self.show_summary(&checklist, &config, ui);
        }

        if self.args.check && !checklist.is_ready() {
            ui.error("Release checklist has open items");
            return Ok(CommandResult::failure(1));
        }
        Ok(CommandResult::success())
    }

    fn show_summary(
        &self,
        checklist: &Checklist,
        config: &ChecklistConfig,
        ui: &mut dyn UserInterface,
    ) {
        let mode = ui.output_mode();
        ui.show_header("Release Checklist");

        if mode.shows_summary() {
            section(ui, "Modules present", &checklist.modules, |n| n.to_string());
            section(ui, "Test suites present", &checklist.tests, |n| n.to_string());
            section(ui, "Commands documented", &checklist.commands, |n| {
                format!("`{}`", n)
            });

            if checklist.gates.is_empty() {
                ui.status(StatusKind::Success, "Gate markers: none found");
            } else {
                ui.status(
                    StatusKind::Warning,
                    &format!("Gate markers: {} remaining", checklist.gates.len()),
                );
                if mode.shows_details() {
                    for finding in &checklist.gates {
                        ui.message(&format!("  {} {}", finding.location(), finding.text));
                    }
                }
            }
        }

        ui.success(&format!("Wrote {}", config.output.display()));
    }
}

fn section(
    ui: &mut dyn UserInterface,
    title: &str,
    results: &[CheckResult],
    label: impl Fn(&str) -> String,
) {
    let passed = passed_count(results);
    ui.status(
        StatusKind::from_passed(passed == results.len()),
        &format!("{}: {}/{}", title, passed, results.len()),
    );
    if ui.output_mode().shows_details() {
        for result in results {
            ui.message(&format!("  {}", format_check(&label(&result.name), result.passed)));
        }
    }
}

impl Command for GenerateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.run(&OsFileSystem, ui)
    }
}
