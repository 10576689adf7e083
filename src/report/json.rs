//! JSON summary formatter.
//!
//! Emits every check result plus counts, for CI tooling.

use super::ReportFormatter;
use crate::checks::{passed_count, CheckResult, Checklist, GateFinding};
use serde::Serialize;
use std::io::Write;

/// Formats a checklist as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    ready: bool,
    modules: &'a [CheckResult],
    tests: &'a [CheckResult],
    commands: &'a [CheckResult],
    gates: &'a [GateFinding],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    modules_present: usize,
    modules_total: usize,
    tests_present: usize,
    tests_total: usize,
    commands_documented: usize,
    commands_total: usize,
    gate_markers: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, checklist: &Checklist, writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            ready: checklist.is_ready(),
            modules: &checklist.modules,
            tests: &checklist.tests,
            commands: &checklist.commands,
            gates: &checklist.gates,
            summary: JsonSummary {
                modules_present: passed_count(&checklist.modules),
                modules_total: checklist.modules.len(),
                tests_present: passed_count(&checklist.tests),
                tests_total: checklist.tests.len(),
                commands_documented: passed_count(&checklist.commands),
                commands_total: checklist.commands.len(),
                gate_markers: checklist.gates.len(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}
