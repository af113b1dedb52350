//! Config command implementation.
//!
//! The `appdoctor config` command shows resolved configuration.

use crate::cli::args::ConfigArgs;
use crate::config::ConfigPaths;
use crate::error::{DoctorError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, Settings};

/// The config command implementation.
pub struct ConfigCommand {
    settings: Settings,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(settings: Settings, args: ConfigArgs) -> Self {
        Self { settings, args }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.settings.load_config()?;

        // Show config file path(s)
        let paths = ConfigPaths::discover(
            &self.settings.project_root,
            self.settings.config_path.as_deref(),
        );
        let existing = paths.all();
        if existing.is_empty() {
            ui.message("# no config files found, using defaults");
        } else {
            for path in &existing {
                ui.message(&format!("# {}", path.display()));
            }
        }
        ui.message("");

        if self.args.json {
            let json = serde_json::to_string_pretty(&config)?;
            ui.message(&json);
        } else {
            let yaml = serde_yaml::to_string(&config).map_err(|e| DoctorError::Other(e.into()))?;
            ui.message(&yaml);
        }

        Ok(CommandResult::success())
    }
}
