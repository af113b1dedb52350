//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::config::{load_config, DoctorConfig};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Settings from global flags, shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Directory searched for `.appdoctor.yml`.
    pub project_root: PathBuf,
    /// Extra config file from `--config`.
    pub config_path: Option<PathBuf>,
    /// SDK root from `--android-home` / `ANDROID_HOME`.
    pub android_home: Option<PathBuf>,
}

impl Settings {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            ..Default::default()
        }
    }

    pub fn from_cli(cli: &Cli, project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_path: cli.config.clone(),
            android_home: cli.android_home.clone(),
        }
    }

    /// Load the merged configuration, with the Android SDK root filled in
    /// from the environment when no file sets it.
    pub fn load_config(&self) -> Result<DoctorConfig> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        Ok(config.with_android_home(self.android_home.clone()))
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand means `check`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(self.settings.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Config(args)) => {
                let cmd = super::config::ConfigCommand::new(self.settings.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd =
                    super::check::CheckCommand::new(self.settings.clone(), CheckArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
