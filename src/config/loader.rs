//! Configuration file discovery and loading.
//!
//! The override file is optional. Without one, the built-in tables in
//! [`crate::config::defaults`] are used unchanged.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::ChecklistConfig;
use crate::config::validator::validate;
use crate::error::{ChecklistError, Result};

/// File name of the project-level override file.
pub const CONFIG_FILE_NAME: &str = ".relcheck.yml";

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in defaults only.
    Defaults,
    /// Loaded from this file.
    File(PathBuf),
}

/// Find the project override file at `<root>/.relcheck.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load and parse a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ChecklistConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ChecklistError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ChecklistError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`ChecklistConfig`].
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ChecklistConfig> {
    if content.trim().is_empty() {
        return Ok(ChecklistConfig::default());
    }

    let config: ChecklistConfig =
        serde_yaml::from_str(content).map_err(|e| ChecklistError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(config.normalize())
}

/// Load config with optional path override, then validate it.
///
/// If `config_override` is provided it must exist. Otherwise the project
/// file is used when present, falling back to defaults.
pub fn load_config(
    project_root: &Path,
    config_override: Option<&Path>,
) -> Result<(ChecklistConfig, ConfigSource)> {
    let (config, source) = match config_override {
        Some(path) => (load_config_file(path)?, ConfigSource::File(path.to_path_buf())),
        None => match find_project_config(project_root) {
            Some(path) => (load_config_file(&path)?, ConfigSource::File(path)),
            None => (ChecklistConfig::default(), ConfigSource::Defaults),
        },
    };

    validate(&config)?;
    tracing::debug!("Loaded checklist config from {:?}", source);
    Ok((config, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_project_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let (config, source) = load_config(temp.path(), None).unwrap();
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(config, ChecklistConfig::default());
    }

    #[test]
    fn project_config_is_discovered() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "modules: [Only]\n").unwrap();

        let (config, source) = load_config(temp.path(), None).unwrap();
        assert_eq!(source, ConfigSource::File(temp.path().join(CONFIG_FILE_NAME)));
        assert_eq!(config.modules, vec!["Only"]);
    }

    #[test]
    fn explicit_override_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");
        let err = load_config(temp.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, ChecklistError::ConfigNotFound { .. }));
    }

    #[test]
    fn explicit_override_wins_over_project_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "modules: [FromProject]\n").unwrap();
        let other = temp.path().join("other.yml");
        fs::write(&other, "modules: [FromOverride]\n").unwrap();

        let (config, _) = load_config(temp.path(), Some(&other)).unwrap();
        assert_eq!(config.modules, vec!["FromOverride"]);
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let err = parse_config("modules: [unterminated", Path::new("x.yml")).unwrap_err();
        assert!(matches!(err, ChecklistError::ConfigParseError { .. }));
    }

    #[test]
    fn empty_file_is_defaults() {
        let config = parse_config("  \n", Path::new("x.yml")).unwrap();
        assert_eq!(config, ChecklistConfig::default());
    }

    #[test]
    fn invalid_values_fail_validation() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "gate_tags: []\n").unwrap();
        let err = load_config(temp.path(), None).unwrap_err();
        assert!(matches!(err, ChecklistError::ConfigValidationError { .. }));
    }

    #[test]
    fn extensions_are_normalized_on_parse() {
        let config = parse_config("scan_extensions: [.rs, .md]\n", Path::new("x.yml")).unwrap();
        assert_eq!(config.scan_extensions, vec!["rs", "md"]);
    }
}
