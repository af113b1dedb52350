//! Doctor run orchestration.
//!
//! The [`Doctor`] walks its workflows in order, skips any whose
//! applicability predicate is false, and runs the validators of the rest
//! one after another. Nothing here decides a status: every status in the
//! report comes straight from a validator.

use serde::Serialize;

use crate::config::DoctorConfig;
use crate::error::{DoctorError, Result};
use crate::platform::HostPlatform;
use crate::probe::ToolProbe;
use crate::validation::{try_merge, ValidationResult, ValidationType};
use crate::workflows::{AndroidWorkflow, IosWorkflow, Workflow};

/// One validator's result, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatorReport {
    pub workflow: String,
    pub title: String,
    #[serde(flatten)]
    pub result: ValidationResult,
}

/// Everything one doctor run found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorReport {
    pub platform: HostPlatform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<ValidationType>,
    pub validators: Vec<ValidatorReport>,
    pub skipped_workflows: Vec<String>,
}

impl DoctorReport {
    pub fn new(
        platform: HostPlatform,
        validators: Vec<ValidatorReport>,
        skipped_workflows: Vec<String>,
    ) -> Self {
        let statuses: Vec<ValidationType> =
            validators.iter().map(|v| v.result.overall()).collect();
        Self {
            platform,
            overall: try_merge(&statuses),
            validators,
            skipped_workflows,
        }
    }

    /// Number of validators that are not fully installed.
    pub fn issue_count(&self) -> usize {
        self.validators
            .iter()
            .filter(|v| v.result.overall() != ValidationType::Installed)
            .count()
    }

    pub fn is_healthy(&self) -> bool {
        self.issue_count() == 0
    }
}

/// Runs workflows and collects their validator results.
pub struct Doctor<'a> {
    platform: HostPlatform,
    workflows: Vec<Box<dyn Workflow + 'a>>,
}

impl<'a> Doctor<'a> {
    pub fn new(platform: HostPlatform, workflows: Vec<Box<dyn Workflow + 'a>>) -> Self {
        Self {
            platform,
            workflows,
        }
    }

    /// The built-in workflow set, all probing through `probe`.
    pub fn standard<P: ToolProbe>(
        platform: HostPlatform,
        probe: &'a P,
        config: &DoctorConfig,
    ) -> Self {
        let ios: Box<dyn Workflow + 'a> = Box::new(IosWorkflow::new(platform, probe, config));
        let android: Box<dyn Workflow + 'a> =
            Box::new(AndroidWorkflow::new(platform, probe, config));
        Self::new(platform, vec![ios, android])
    }

    /// Keep only the named workflows. An empty list keeps everything.
    pub fn only(mut self, names: &[String]) -> Result<Self> {
        if names.is_empty() {
            return Ok(self);
        }
        for name in names {
            if !self.workflows.iter().any(|w| w.name() == name) {
                return Err(DoctorError::UnknownWorkflow { name: name.clone() });
            }
        }
        self.workflows
            .retain(|w| names.iter().any(|n| n == w.name()));
        Ok(self)
    }

    pub fn workflow_names(&self) -> Vec<&str> {
        self.workflows.iter().map(|w| w.name()).collect()
    }

    /// Run every applicable workflow's validators, in order.
    pub fn run(&self) -> DoctorReport {
        let mut validators = Vec::new();
        let mut skipped = Vec::new();

        for workflow in &self.workflows {
            if !workflow.applies_to_host_platform() {
                tracing::info!(
                    workflow = workflow.name(),
                    platform = %self.platform,
                    "workflow does not apply, skipping"
                );
                skipped.push(workflow.name().to_string());
                continue;
            }

            for validator in workflow.validators() {
                tracing::debug!(validator = validator.title(), "running validator");
                let result = validator.validate();
                tracing::debug!(
                    validator = validator.title(),
                    status = %result.overall(),
                    "validator finished"
                );
                validators.push(ValidatorReport {
                    workflow: workflow.name().to_string(),
                    title: validator.title().to_string(),
                    result,
                });
            }
        }

        DoctorReport::new(self.platform, validators, skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::FakeProbe;

    #[test]
    fn linux_skips_ios() {
        let probe = FakeProbe::new();
        let config = DoctorConfig::default();
        let report = Doctor::standard(HostPlatform::Linux, &probe, &config).run();

        assert_eq!(report.skipped_workflows, vec!["ios"]);
        assert!(report.validators.iter().all(|v| v.workflow == "android"));
        assert!(!probe.ran_tool("xcodebuild"));
    }

    #[test]
    fn macos_runs_everything() {
        let probe = FakeProbe::new();
        let config = DoctorConfig::default();
        let report = Doctor::standard(HostPlatform::MacOS, &probe, &config).run();

        assert!(report.skipped_workflows.is_empty());
        assert_eq!(report.validators.len(), 3);
        assert_eq!(report.issue_count(), 3);
        assert!(!report.is_healthy());
        assert_eq!(report.overall, Some(ValidationType::Missing));
    }

    #[test]
    fn standard_workflows_match_accepted_names() {
        let probe = FakeProbe::new();
        let config = DoctorConfig::default();
        let doctor = Doctor::standard(HostPlatform::Linux, &probe, &config);
        assert_eq!(doctor.workflow_names(), crate::workflows::WORKFLOW_NAMES);
    }

    #[test]
    fn only_filters_workflows() {
        let probe = FakeProbe::new();
        let config = DoctorConfig::default();
        let doctor = Doctor::standard(HostPlatform::MacOS, &probe, &config)
            .only(&["android".to_string()])
            .unwrap();
        assert_eq!(doctor.workflow_names(), vec!["android"]);

        let report = doctor.run();
        assert_eq!(report.validators.len(), 1);
        assert!(report.skipped_workflows.is_empty());
    }

    #[test]
    fn only_rejects_unknown_workflow() {
        let probe = FakeProbe::new();
        let config = DoctorConfig::default();
        let err = Doctor::standard(HostPlatform::MacOS, &probe, &config)
            .only(&["fuchsia".to_string()])
            .err()
            .unwrap();
        assert!(matches!(err, DoctorError::UnknownWorkflow { .. }));
    }

    #[test]
    fn empty_report_has_no_overall() {
        let report = DoctorReport::new(HostPlatform::Linux, vec![], vec!["ios".to_string()]);
        assert!(report.overall.is_none());
        assert!(report.is_healthy());
    }

    #[test]
    fn report_serializes_flattened_results() {
        let probe = FakeProbe::new();
        let config = DoctorConfig::default();
        let report = Doctor::standard(HostPlatform::Linux, &probe, &config).run();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["platform"], "linux");
        assert_eq!(json["validators"][0]["workflow"], "android");
        assert_eq!(json["validators"][0]["status"], "missing");
        assert_eq!(json["skipped_workflows"][0], "ios");
    }
}
