//! Error types for checklist generation.
//!
//! This module defines [`ChecklistError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Missing inputs (module directories, test directories, the docs file)
//!   are never errors; checks fold them into a failed result
//! - Use `ChecklistError` for config problems and report writing
//! - Anything else from the filesystem is fatal and surfaces as `Io`

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for checklist operations.
#[derive(Debug, Error)]
pub enum ChecklistError {
    /// Config file passed explicitly does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The report could not be written to its output path.
    #[error("Failed to write report to {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChecklistError {
    /// Whether this error came from loading or validating configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParseError { .. }
                | Self::ConfigValidationError { .. }
        )
    }
}

/// Result type alias for checklist operations.
pub type Result<T> = std::result::Result<T, ChecklistError>;
