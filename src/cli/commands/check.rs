//! Check command implementation.
//!
//! `appdoctor check` (also the default command) runs every workflow that
//! applies to the host platform and reports what it found.

use crate::cli::args::CheckArgs;
use crate::config::DoctorConfig;
use crate::doctor::Doctor;
use crate::error::Result;
use crate::platform::HostPlatform;
use crate::probe::{SystemProbe, ToolProbe};
use crate::ui::UserInterface;
use crate::workflows::android::sdk_tool_dirs;

use super::dispatcher::{Command, CommandResult, Settings};
use super::display::show_report;

/// The check command implementation.
pub struct CheckCommand {
    settings: Settings,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(settings: Settings, args: CheckArgs) -> Self {
        Self { settings, args }
    }

    /// Platform to check for: `--platform`, else the one we are running on.
    pub fn platform(&self) -> Result<HostPlatform> {
        match &self.args.platform {
            Some(name) => name.parse(),
            None => Ok(HostPlatform::current()),
        }
    }

    /// Run the check against `probe` and print the report.
    ///
    /// Exits 0 only when every validator reports installed.
    pub fn run_with_probe<P: ToolProbe>(
        &self,
        ui: &mut dyn UserInterface,
        probe: &P,
        config: &DoctorConfig,
    ) -> Result<CommandResult> {
        let platform = self.platform()?;
        let doctor = Doctor::standard(platform, probe, config).only(&self.args.workflow)?;
        tracing::debug!(
            platform = %platform,
            workflows = ?doctor.workflow_names(),
            "starting doctor run"
        );

        let report = doctor.run();

        if self.args.json {
            let json = serde_json::to_string_pretty(&report)?;
            ui.message(&json);
        } else {
            show_report(ui, &report);
        }

        if report.is_healthy() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.settings.load_config()?;

        let mut probe = SystemProbe::new();
        if let Some(root) = config.android_sdk_root() {
            probe = probe.prepend_paths(sdk_tool_dirs(root));
        }

        self.run_with_probe(ui, &probe, &config)
    }
}
