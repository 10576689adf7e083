//! Report formatting and writing.
//!
//! - [`markdown`] - the checklist document written to disk
//! - [`json`] - a machine-readable summary for CI

pub mod json;
pub mod markdown;

use std::io::Write;
use std::path::Path;

use crate::checks::Checklist;
use crate::error::{ChecklistError, Result};
use crate::fs::FileSystem;

/// Trait for formatting a checklist.
pub trait ReportFormatter {
    /// Format the checklist to the given writer.
    fn format<W: Write>(&self, checklist: &Checklist, writer: &mut W) -> std::io::Result<()>;
}

pub use json::JsonFormatter;
pub use markdown::{format_check, MarkdownFormatter};

/// Write a report, creating missing parent directories.
///
/// Any existing file at `path` is replaced.
///
/// # Errors
///
/// Returns `ReportWrite` if the directory or file cannot be written.
pub fn write_report(fs: &dyn FileSystem, path: &Path, contents: &str) -> Result<()> {
    let wrap = |source: std::io::Error| ChecklistError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !fs.is_dir(parent) {
            fs.create_dir_all(parent).map_err(wrap)?;
        }
    }
    fs.write(path, contents.as_bytes()).map_err(wrap)?;
    tracing::debug!("Wrote report to {}", path.display());
    Ok(())
}
