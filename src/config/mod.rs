//! Checklist configuration.
//!
//! - Built-in tables in [`defaults`]
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use relcheck::config::{load_config, ConfigSource};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".relcheck.yml"), "modules: [CoreKit]").unwrap();
//!
//! let (config, source) = load_config(temp.path(), None).unwrap();
//! assert!(matches!(source, ConfigSource::File(_)));
//! assert_eq!(config.modules, vec!["CoreKit".to_string()]);
//! ```

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    find_project_config, load_config, load_config_file, parse_config, ConfigSource,
    CONFIG_FILE_NAME,
};
pub use schema::ChecklistConfig;
pub use validator::validate;
