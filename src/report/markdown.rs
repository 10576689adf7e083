//! Markdown checklist formatter.
//!
//! Produces the release checklist document:
//!
//! ```text
//! # Release Checklist
//!
//! ## Required Modules
//! - ✅ CoreKit
//! ...
//! ## TODO Markers [GATE0]..[GATE6]
//! - Notes.md:3 [GATE3] fix this
//! ```

use std::io::Write;

use super::ReportFormatter;
use crate::checks::{CheckResult, Checklist};

/// Marker for a passing item.
pub const PASS_MARK: &str = "✅";

/// Marker for a failing item.
pub const FAIL_MARK: &str = "❌";

/// Placeholder line when no gate markers were found.
pub const NO_GATES_LINE: &str = "- None found";

/// Formats a checklist as Markdown.
pub struct MarkdownFormatter {
    gate_heading: String,
}

impl MarkdownFormatter {
    /// Create a formatter whose gate section names the tag range.
    pub fn new(gate_tags: &[String]) -> Self {
        let gate_heading = match (gate_tags.first(), gate_tags.last()) {
            (Some(first), Some(last)) if first != last => {
                format!("## TODO Markers {}..{}", first, last)
            }
            (Some(only), _) => format!("## TODO Markers {}", only),
            _ => "## TODO Markers".to_string(),
        };
        Self { gate_heading }
    }

    /// Render to a string.
    pub fn render(&self, checklist: &Checklist) -> String {
        let mut output = Vec::new();
        // Writing into a Vec cannot fail.
        self.format(checklist, &mut output).ok();
        String::from_utf8(output).unwrap_or_default()
    }
}

/// `- ✅ item` or `- ❌ item`.
pub fn format_check(item: &str, passed: bool) -> String {
    let mark = if passed { PASS_MARK } else { FAIL_MARK };
    format!("- {} {}", mark, item)
}

fn write_section<W: Write>(
    writer: &mut W,
    heading: &str,
    results: &[CheckResult],
    label: impl Fn(&str) -> String,
) -> std::io::Result<()> {
    writeln!(writer, "{}", heading)?;
    for result in results {
        writeln!(writer, "{}", format_check(&label(&result.name), result.passed))?;
    }
    Ok(())
}

impl ReportFormatter for MarkdownFormatter {
    fn format<W: Write>(&self, checklist: &Checklist, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "# Release Checklist")?;
        writeln!(writer)?;

        write_section(writer, "## Required Modules", &checklist.modules, |name| {
            name.to_string()
        })?;
        writeln!(writer)?;

        write_section(writer, "## Required Tests", &checklist.tests, |name| {
            name.to_string()
        })?;
        writeln!(writer)?;

        write_section(
            writer,
            "## Required Commands Documented",
            &checklist.commands,
            |cmd| format!("`{}`", cmd),
        )?;
        writeln!(writer)?;

        writeln!(writer, "{}", self.gate_heading)?;
        if checklist.gates.is_empty() {
            writeln!(writer, "{}", NO_GATES_LINE)?;
        } else {
            for finding in &checklist.gates {
                writeln!(writer, "- {} {}", finding.location(), finding.text)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::GateFinding;
    use crate::config::defaults::gate_tags;

    fn sample() -> Checklist {
        Checklist {
            modules: vec![CheckResult::pass("CoreKit"), CheckResult::fail("AICore")],
            tests: vec![
                CheckResult::pass("CoreKitTests"),
                CheckResult::fail("AICoreTests"),
            ],
            commands: vec![CheckResult::pass("swift test")],
            gates: vec![GateFinding::new("Notes.md", 3, "  [GATE3] fix this  ")],
        }
    }

    #[test]
    fn renders_full_document() {
        let output = MarkdownFormatter::new(&gate_tags()).render(&sample());
        let expected = "\
# Release Checklist

## Required Modules
- ✅ CoreKit
- ❌ AICore

## Required Tests
- ✅ CoreKitTests
- ❌ AICoreTests

## Required Commands Documented
- ✅ `swift test`

## TODO Markers [GATE0]..[GATE6]
- Notes.md:3 [GATE3] fix this
";
        assert_eq!(output, expected);
    }

    #[test]
    fn empty_gates_use_placeholder() {
        let mut checklist = sample();
        checklist.gates.clear();
        let output = MarkdownFormatter::new(&gate_tags()).render(&checklist);
        assert!(output.ends_with("## TODO Markers [GATE0]..[GATE6]\n- None found\n"));
    }

    #[test]
    fn document_ends_with_single_newline() {
        let output = MarkdownFormatter::new(&gate_tags()).render(&sample());
        assert!(output.ends_with('\n'));
        assert!(!output.ends_with("\n\n"));
    }

    #[test]
    fn heading_for_single_tag() {
        let formatter = MarkdownFormatter::new(&["FIXME".to_string()]);
        let output = formatter.render(&sample());
        assert!(output.contains("## TODO Markers FIXME\n"));
    }

    #[test]
    fn format_check_uses_markers() {
        assert_eq!(format_check("CoreKit", true), "- ✅ CoreKit");
        assert_eq!(format_check("`swift test`", false), "- ❌ `swift test`");
    }

    #[test]
    fn empty_sections_keep_headings() {
        let checklist = Checklist {
            modules: vec![],
            tests: vec![],
            commands: vec![],
            gates: vec![],
        };
        let output = MarkdownFormatter::new(&gate_tags()).render(&checklist);
        assert!(output.contains("## Required Modules\n\n## Required Tests\n"));
    }
}
