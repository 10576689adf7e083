//! relcheck - Release readiness checklist generator.
//!
//! Scans a repository for required modules, their test suites, documented
//! build commands, and leftover gate markers (`[GATE0]`..`[GATE6]`), then
//! writes a Markdown checklist to `Docs/release_checklist.md`.
//!
//! # Modules
//!
//! - [`checks`] - The four repository checks and the [`checks::Checklist`] aggregate
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Built-in tables and optional `.relcheck.yml` overrides
//! - [`error`] - Error types and result aliases
//! - [`fs`] - Injectable file access
//! - [`report`] - Markdown and JSON formatting, report writing
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use relcheck::checks::Checklist;
//! use relcheck::config::ChecklistConfig;
//! use relcheck::fs::MemoryFileSystem;
//! use relcheck::report::MarkdownFormatter;
//!
//! let fs = MemoryFileSystem::new();
//! fs.add_dir("/repo/Sources/CoreKit");
//! fs.add_file("/repo/Notes.md", "[GATE2] and [GATE5]");
//!
//! let config = ChecklistConfig::default();
//! let checklist = Checklist::collect(&fs, Path::new("/repo"), &config).unwrap();
//! assert!(checklist.modules[0].passed);
//! assert_eq!(checklist.gates.len(), 1);
//!
//! let report = MarkdownFormatter::new(&config.gate_tags).render(&checklist);
//! assert!(report.contains("- Notes.md:1 [GATE2] and [GATE5]"));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod report;
pub mod ui;

pub use error::{ChecklistError, Result};
