//! Configuration validation.

use crate::config::schema::ChecklistConfig;
use crate::error::{ChecklistError, Result};

/// Validate a loaded configuration.
///
/// # Errors
///
/// Returns `ConfigValidationError` naming the first offending field.
pub fn validate(config: &ChecklistConfig) -> Result<()> {
    let required_paths = [
        ("sources_dir", config.sources_dir.as_os_str().is_empty()),
        ("tests_dir", config.tests_dir.as_os_str().is_empty()),
        ("docs_file", config.docs_file.as_os_str().is_empty()),
        ("output", config.output.as_os_str().is_empty()),
    ];
    for (field, empty) in required_paths {
        if empty {
            return Err(invalid(format!("{} must not be empty", field)));
        }
    }

    if config.test_suffix.is_empty() {
        return Err(invalid("test_suffix must not be empty"));
    }
    if config.test_extension.is_empty() {
        return Err(invalid("test_extension must not be empty"));
    }

    if config.gate_tags.is_empty() {
        return Err(invalid("gate_tags must not be empty"));
    }
    if config.gate_tags.iter().any(|t| t.is_empty()) {
        // An empty tag would match every line.
        return Err(invalid("gate_tags must not contain an empty tag"));
    }

    if config.commands.iter().any(|c| c.is_empty()) {
        return Err(invalid("commands must not contain an empty entry"));
    }

    Ok(())
}

fn invalid(message: impl Into<String>) -> ChecklistError {
    ChecklistError::ConfigValidationError {
        message: message.into(),
    }
}
