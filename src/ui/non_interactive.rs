//! Non-interactive UI for CI/headless environments.

use super::{OutputMode, StatusKind, UserInterface};

/// UI implementation for piped or CI output.
///
/// No colors; status lines use bracketed labels so logs stay
/// grep-friendly.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        println!("{}", kind.format_plain(msg));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_summary() {
            println!("{}", title);
            println!();
        }
    }
}
