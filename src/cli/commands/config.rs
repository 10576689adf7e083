//! Config command implementation.
//!
//! The `relcheck config` command shows the effective configuration after
//! applying any override file.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{load_config, ConfigSource};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (config, source) = match load_config(&self.project_root, self.config_path.as_deref()) {
            Ok(loaded) => loaded,
            Err(e) if e.is_config_error() => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let output = if self.args.json {
            serde_json::to_string_pretty(&config).map_err(anyhow::Error::from)?
        } else {
            let origin = match &source {
                ConfigSource::Defaults => "built-in defaults".to_string(),
                ConfigSource::File(path) => path.display().to_string(),
            };
            let yaml = serde_yaml::to_string(&config).map_err(anyhow::Error::from)?;
            format!("# Source: {}\n{}", origin, yaml)
        };

        ui.message(output.trim_end());
        Ok(CommandResult::success())
    }
}
