//! Styled terminal UI.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, ChecklistTheme, NonInteractiveUI, OutputMode, StatusKind, UserInterface,
};

/// Terminal UI implementation with colors and status icons.
pub struct TerminalUI {
    term: Term,
    theme: ChecklistTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            ChecklistTheme::new()
        } else {
            ChecklistTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        // Errors go to stderr so they survive stdout redirection.
        writeln!(Term::stderr(), "{}", self.theme.format_error(msg)).ok();
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        writeln!(self.term, "{}", kind.format(&self.theme, msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_summary() {
            writeln!(self.term, "{}", self.theme.format_header(title)).ok();
            writeln!(self.term).ok();
        }
    }
}

/// Whether styled output is appropriate: stdout is a TTY and `CI` is unset.
pub fn is_interactive_terminal() -> bool {
    std::env::var_os("CI").is_none() && Term::stdout().is_term()
}

/// Create the appropriate UI for the current terminal.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    if is_interactive_terminal() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
