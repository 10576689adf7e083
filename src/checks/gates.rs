//! Gate-tag scanning.
//!
//! Walks the repository looking for lines that carry a release gate marker
//! such as `[GATE3]`. Traversal is depth-first with entries in name order;
//! within a directory, files are scanned before subdirectories are entered.

use std::path::{Component, Path, PathBuf};

use crate::error::Result;
use crate::fs::{EntryKind, FileSystem};

use super::types::GateFinding;

/// Scans a tree for gate tags.
#[derive(Debug, Clone)]
pub struct GateScanner {
    tags: Vec<String>,
    extensions: Vec<String>,
    excluded: Vec<String>,
    ignored_files: Vec<PathBuf>,
}

impl GateScanner {
    /// Create a scanner.
    ///
    /// * `tags` - literal substrings that flag a line
    /// * `extensions` - file extensions to read, without the dot
    /// * `excluded` - top-level directory names to prune
    pub fn new(tags: Vec<String>, extensions: Vec<String>, excluded: Vec<String>) -> Self {
        Self {
            tags,
            extensions,
            excluded,
            ignored_files: Vec::new(),
        }
    }

    /// Never scan this file, e.g. the generated report itself.
    ///
    /// Paths are compared in canonical form, so relative, absolute and
    /// `..`-containing spellings of the same file all match. A path that does
    /// not exist yet is ignored.
    pub fn ignore_file(mut self, path: PathBuf) -> Self {
        self.ignored_files.push(path);
        self
    }

    /// Whether a line carries at least one tag.
    pub fn line_matches(&self, line: &str) -> bool {
        self.tags.iter().any(|tag| line.contains(tag.as_str()))
    }

    /// Scan text, producing at most one finding per line.
    pub fn scan_text(&self, rel_path: &str, text: &str) -> Vec<GateFinding> {
        split_lines(text)
            .into_iter()
            .enumerate()
            .filter(|(_, line)| self.line_matches(line))
            .map(|(idx, line)| GateFinding::new(rel_path, idx + 1, line))
            .collect()
    }

    /// Scan everything under `root`.
    ///
    /// A missing root yields no findings. Files that are not valid UTF-8
    /// are skipped.
    ///
    /// # Errors
    ///
    /// Any other I/O failure (unreadable directory or file) is returned.
    pub fn scan(&self, fs: &dyn FileSystem, root: &Path) -> Result<Vec<GateFinding>> {
        let mut findings = Vec::new();
        if fs.is_dir(root) {
            let ignored: Vec<PathBuf> = self
                .ignored_files
                .iter()
                .filter_map(|path| fs.canonicalize(path).ok())
                .collect();
            self.walk(fs, root, root, &ignored, &mut findings)?;
        }
        Ok(findings)
    }

    fn walk(
        &self,
        fs: &dyn FileSystem,
        root: &Path,
        dir: &Path,
        ignored: &[PathBuf],
        findings: &mut Vec<GateFinding>,
    ) -> Result<()> {
        let entries = fs.read_dir(dir)?;

        for entry in entries.iter().filter(|e| e.kind == EntryKind::File) {
            let wanted = entry
                .extension()
                .is_some_and(|ext| self.extensions.iter().any(|e| e == ext));
            if !wanted || is_ignored(fs, &entry.path, ignored) {
                continue;
            }

            let bytes = fs.read(&entry.path)?;
            let text = match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(_) => {
                    tracing::debug!("Skipping non-UTF-8 file {}", entry.path.display());
                    continue;
                }
            };
            let rel = relative_display(root, &entry.path);
            findings.extend(self.scan_text(&rel, &text));
        }

        for entry in entries.iter().filter(|e| e.kind == EntryKind::Dir) {
            if self.is_excluded(root, &entry.path) {
                tracing::debug!("Pruning {}", entry.path.display());
                continue;
            }
            self.walk(fs, root, &entry.path, ignored, findings)?;
        }

        Ok(())
    }

    /// Whether the first segment of `path` relative to `root` is excluded.
    fn is_excluded(&self, root: &Path, path: &Path) -> bool {
        let first = path
            .strip_prefix(root)
            .ok()
            .and_then(|rel| rel.components().next());
        match first {
            Some(Component::Normal(segment)) => {
                let segment = segment.to_string_lossy();
                self.excluded.iter().any(|e| e.as_str() == segment.as_ref())
            }
            _ => false,
        }
    }
}

/// Whether `path` is one of the canonical `ignored` paths.
fn is_ignored(fs: &dyn FileSystem, path: &Path, ignored: &[PathBuf]) -> bool {
    let name = path.file_name();
    if !ignored.iter().any(|p| p.file_name() == name) {
        return false;
    }
    fs.canonicalize(path).is_ok_and(|canonical| ignored.contains(&canonical))
}

/// `path` relative to `root`, always `/`-separated.
fn relative_display(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Whether `c` ends a line: `\n`, `\r`, vertical tab, form feed, the file,
/// group and record separators, NEL, and the Unicode line and paragraph
/// separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split into lines on any line break, treating `\r\n` as one break and
/// not yielding a trailing empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..idx]);
        let mut end = idx + c.len_utf8();
        if c == '\r' {
            if let Some(&(next, '\n')) = chars.peek() {
                chars.next();
                end = next + 1;
            }
        }
        start = end;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
