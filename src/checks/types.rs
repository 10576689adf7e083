//! Check result types.

use serde::Serialize;

/// Outcome of a single pass/fail check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// What was checked (module, test directory, or command).
    pub name: String,

    /// Whether the check passed.
    pub passed: bool,
}

impl CheckResult {
    /// Create a passing result.
    pub fn pass(name: &str) -> Self {
        Self::new(name, true)
    }

    /// Create a failing result.
    pub fn fail(name: &str) -> Self {
        Self::new(name, false)
    }

    /// Create a result from a boolean outcome.
    pub fn new(name: &str, passed: bool) -> Self {
        Self {
            name: name.to_string(),
            passed,
        }
    }
}

/// A line carrying at least one gate tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateFinding {
    /// Path relative to the repository root, `/`-separated.
    pub path: String,

    /// 1-based line number.
    pub line: usize,

    /// Line content with surrounding whitespace trimmed.
    pub text: String,
}

impl GateFinding {
    /// Create a finding, trimming the line text.
    pub fn new(path: &str, line: usize, text: &str) -> Self {
        Self {
            path: path.to_string(),
            line,
            text: text.trim().to_string(),
        }
    }

    /// `path:line` location string.
    pub fn location(&self) -> String {
        format!("{}:{}", self.path, self.line)
    }
}
