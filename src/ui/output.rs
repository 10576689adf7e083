//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show every checklist item and finding.
    Verbose,
    /// Show section summaries.
    #[default]
    Normal,
    /// Show only the final status line.
    Quiet,
}

impl OutputMode {
    /// Pick the mode from the `--verbose` / `--quiet` flags.
    ///
    /// clap rejects both together; `quiet` wins if they ever meet.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode lists individual items.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows per-section summaries.
    pub fn shows_summary(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
