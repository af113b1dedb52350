//! Xcode and CocoaPods validation.
//!
//! Two aspects are merged into one result: the Xcode toolchain itself and
//! the CocoaPods dependency manager. Either can be missing independently.

use crate::probe::{ToolProbe, Version};
use crate::validation::{AspectId, DoctorValidator, ValidationPass, ValidationResult};

use super::cocoapods::{PackageManagerProbe, PackageManagerStatus};

pub const XCODE_TITLE: &str = "Xcode - develop for iOS and macOS";

const XCODE_INSTALL_INSTRUCTIONS: &str = "Xcode installation is incomplete; a full installation is necessary for iOS development.\n\
    Download at: https://developer.apple.com/xcode/download/\n\
    Or install Xcode via the App Store.\n\
    Once installed, run:\n  \
    sudo xcode-select --switch /Applications/Xcode.app/Contents/Developer\n  \
    sudo xcodebuild -runFirstLaunch";

const XCODE_EULA_INSTRUCTIONS: &str = "Xcode end user license agreement not signed or first launch not completed.\n\
    Open Xcode or run:\n  \
    sudo xcodebuild -runFirstLaunch";

const XCODE_SIMCTL_INSTRUCTIONS: &str = "Unable to get the list of installed Simulator devices.\n\
    Open Xcode and install a Simulator runtime from Settings > Platforms, or run:\n  \
    xcodebuild -downloadPlatform iOS";

/// Checks the Xcode toolchain and the CocoaPods dependency manager.
pub struct XcodeValidator<P, M> {
    probe: P,
    package_manager: M,
    minimum_version: Version,
}

impl<P: ToolProbe, M: PackageManagerProbe> XcodeValidator<P, M> {
    pub fn new(probe: P, package_manager: M, minimum_version: Version) -> Self {
        Self {
            probe,
            package_manager,
            minimum_version,
        }
    }

    fn check_xcode(&self, pass: &mut ValidationPass, xcode: AspectId) {
        if !self.probe.exists("xcodebuild") {
            pass.absent(xcode, XCODE_INSTALL_INSTRUCTIONS);
            return;
        }

        let developer_dir = self.probe.stdout_of("xcode-select", &["-p"]);
        let version_text = self.probe.stdout_of("xcodebuild", &["-version"]);
        let version = version_text.as_deref().and_then(Version::parse);

        let found = match (&version, &developer_dir) {
            (Some(v), Some(dir)) => format!("Xcode {} at {}", v, dir),
            (None, Some(dir)) => format!("Xcode at {}", dir),
            (Some(v), None) => format!("Xcode {} installation found", v),
            (None, None) => "Xcode installation found".to_string(),
        };
        pass.present(xcode, found);
        if let Some(v) = &version {
            pass.set_summary(v.to_string());
        }

        match &version {
            Some(v) if v.meets(&self.minimum_version) => {}
            Some(v) => pass.degrade(
                xcode,
                format!(
                    "Xcode {} out of date ({} is required).\n\
                     Download the latest version or update via the Mac App Store.",
                    v, self.minimum_version
                ),
            ),
            None => pass.degrade(
                xcode,
                format!(
                    "Could not determine the installed Xcode version ({} is required).",
                    self.minimum_version
                ),
            ),
        }

        if !self.probe.succeeds("xcodebuild", &["-checkFirstLaunchStatus"]) {
            pass.degrade(xcode, XCODE_EULA_INSTRUCTIONS);
        }

        if !self.probe.succeeds("xcrun", &["simctl", "list", "devices"]) {
            pass.degrade(xcode, XCODE_SIMCTL_INSTRUCTIONS);
        }
    }

    fn check_package_manager(&self, pass: &mut ValidationPass, pods: AspectId) {
        let manager = &self.package_manager;
        if !self.probe.exists(manager.command()) {
            pass.absent(
                pods,
                format!(
                    "{} not installed.\n{}",
                    manager.name(),
                    manager.install_instructions()
                ),
            );
            return;
        }
        pass.mark_present(pods);

        let classification = manager.classify();
        match classification.status {
            PackageManagerStatus::Recommended => {
                let version = classification
                    .version
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                if manager.is_initialized() {
                    pass.info(format!("{} version {}", manager.name(), version));
                } else {
                    pass.degrade(
                        pods,
                        format!(
                            "{} {} installed but not initialized.\n{}",
                            manager.name(),
                            version,
                            manager.setup_instructions()
                        ),
                    );
                }
            }
            PackageManagerStatus::NotInstalled => pass.degrade(
                pods,
                format!(
                    "{} installed but not working.\n{}",
                    manager.name(),
                    classification.install_instructions
                ),
            ),
            PackageManagerStatus::Outdated => pass.degrade(
                pods,
                format!(
                    "{} {} out of date ({} is recommended).\n{}",
                    manager.name(),
                    classification
                        .version
                        .map(|v| v.to_string())
                        .unwrap_or_default(),
                    classification.recommended_version,
                    classification.upgrade_instructions
                ),
            ),
        }
    }
}

impl<P: ToolProbe, M: PackageManagerProbe> DoctorValidator for XcodeValidator<P, M> {
    fn title(&self) -> &str {
        XCODE_TITLE
    }

    fn validate(&self) -> ValidationResult {
        let mut pass = ValidationPass::new();
        let xcode = pass.aspect("xcode");
        let pods = pass.aspect("cocoapods");

        self.check_xcode(&mut pass, xcode);
        self.check_package_manager(&mut pass, pods);

        tracing::debug!(xcode = %pass.status(xcode), cocoapods = %pass.status(pods), "validated Xcode");
        pass.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::FakeProbe;
    use crate::validation::ValidationType;
    use crate::workflows::cocoapods::{CocoaPods, PackageManagerClassification};

    const REPOS: &str = "/Users/dev/.cocoapods/repos";

    fn healthy_xcode() -> FakeProbe {
        FakeProbe::new()
            .with_tool("xcodebuild")
            .with_tool("xcrun")
            .with_output(
                "xcode-select",
                &["-p"],
                0,
                "/Applications/Xcode.app/Contents/Developer\n",
            )
            .with_output("xcodebuild", &["-version"], 0, "Xcode 15.2\nBuild version 15C500b\n")
            .with_output("xcodebuild", &["-checkFirstLaunchStatus"], 0, "")
            .with_output("xcrun", &["simctl", "list", "devices"], 0, "== Devices ==\n")
    }

    fn with_pods(probe: FakeProbe, version: &str) -> FakeProbe {
        probe
            .with_tool("pod")
            .with_output("pod", &["--version"], 0, version)
            .with_path(REPOS)
    }

    fn validate(probe: &FakeProbe) -> ValidationResult {
        let pods = CocoaPods::new(probe, "1.13.0".parse().unwrap()).with_repos_dir(REPOS);
        XcodeValidator::new(probe, pods, "14.0".parse().unwrap()).validate()
    }

    fn texts(result: &ValidationResult) -> Vec<&str> {
        result.messages().iter().map(|m| m.text()).collect()
    }

    #[test]
    fn everything_installed() {
        let probe = with_pods(healthy_xcode(), "1.15.2\n");
        let result = validate(&probe);

        assert_eq!(result.overall(), ValidationType::Installed);
        assert_eq!(result.summary(), Some("15.2"));
        assert_eq!(
            texts(&result),
            vec![
                "Xcode 15.2 at /Applications/Xcode.app/Contents/Developer",
                "CocoaPods version 1.15.2",
            ]
        );
        assert!(!result.has_errors());
    }

    #[test]
    fn missing_xcode_short_circuits() {
        let probe = with_pods(FakeProbe::new(), "1.15.2\n");
        let result = validate(&probe);

        assert_eq!(result.overall(), ValidationType::Partial);
        assert!(result.messages()[0].is_error());
        assert!(result.messages()[0].text().contains("Xcode installation is incomplete"));
        assert!(!probe.ran_tool("xcodebuild"));
        assert!(!probe.ran_tool("xcode-select"));
        assert!(!probe.ran_tool("xcrun"));
        assert!(result.summary().is_none());
    }

    #[test]
    fn old_xcode_is_partial_with_two_messages() {
        let probe = healthy_xcode()
            .with_output("xcodebuild", &["-version"], 0, "Xcode 13.4.1\nBuild version 13F100\n");
        let probe = with_pods(probe, "1.15.2\n");
        let result = validate(&probe);

        assert_eq!(result.overall(), ValidationType::Partial);
        let messages = result.messages();
        assert!(!messages[0].is_error());
        assert!(messages[1].is_error());
        assert!(messages[1].text().starts_with("Xcode 13.4.1 out of date (14.0 is required)"));
        assert_eq!(result.summary(), Some("13.4.1"));
    }

    #[test]
    fn each_secondary_failure_adds_a_message() {
        let probe = FakeProbe::new()
            .with_tool("xcodebuild")
            .with_output("xcodebuild", &["-version"], 0, "Xcode 12.5\n")
            .with_output("xcodebuild", &["-checkFirstLaunchStatus"], 69, "");
        let probe = with_pods(probe, "1.15.2\n");
        let result = validate(&probe);

        assert_eq!(result.overall(), ValidationType::Partial);
        assert_eq!(result.error_count(), 3);
        assert_eq!(texts(&result)[0], "Xcode 12.5 installation found");
        assert!(texts(&result)[2].contains("license agreement"));
        assert!(texts(&result)[3].contains("Simulator"));
    }

    #[test]
    fn unknown_xcode_version_is_partial() {
        let probe = healthy_xcode().with_output("xcodebuild", &["-version"], 1, "");
        let probe = with_pods(probe, "1.15.2\n");
        let result = validate(&probe);

        assert_eq!(result.overall(), ValidationType::Partial);
        assert!(texts(&result)[1].contains("Could not determine the installed Xcode version"));
    }

    #[test]
    fn missing_cocoapods_skips_classification() {
        let probe = healthy_xcode();
        let result = validate(&probe);

        assert_eq!(result.overall(), ValidationType::Partial);
        assert!(texts(&result)[1].starts_with("CocoaPods not installed."));
        assert!(texts(&result)[1].contains("sudo gem install cocoapods"));
        assert!(!probe.ran_tool("pod"));
    }

    #[test]
    fn outdated_cocoapods() {
        let probe = with_pods(healthy_xcode(), "1.11.3\n");
        let result = validate(&probe);

        assert_eq!(result.overall(), ValidationType::Partial);
        let last = result.messages().last().unwrap();
        assert!(last.is_error());
        assert!(last.text().starts_with("CocoaPods 1.11.3 out of date (1.13.0 is recommended)."));
        assert!(last.text().contains("brew upgrade cocoapods"));
    }

    #[test]
    fn broken_cocoapods_is_not_installed() {
        let probe = healthy_xcode()
            .with_tool("pod")
            .with_output("pod", &["--version"], 1, "");
        let result = validate(&probe);

        assert_eq!(result.overall(), ValidationType::Partial);
        assert!(texts(&result)[1].starts_with("CocoaPods installed but not working."));
    }

    #[test]
    fn uninitialized_cocoapods() {
        let probe = healthy_xcode()
            .with_tool("pod")
            .with_output("pod", &["--version"], 0, "1.15.2\n");
        let result = validate(&probe);

        assert_eq!(result.overall(), ValidationType::Partial);
        assert!(texts(&result)[1].contains("installed but not initialized"));
        assert!(texts(&result)[1].contains("pod setup"));
    }

    #[test]
    fn repeated_validation_does_not_accumulate() {
        let probe = with_pods(healthy_xcode(), "1.11.3\n");
        let pods = CocoaPods::new(&probe, "1.13.0".parse().unwrap()).with_repos_dir(REPOS);
        let validator = XcodeValidator::new(&probe, pods, "14.0".parse().unwrap());

        let first = validator.validate();
        let second = validator.validate();
        assert_eq!(first, second);
        assert_eq!(second.messages().len(), 2);
    }

    struct Gradle {
        status: PackageManagerStatus,
        initialized: bool,
    }

    impl PackageManagerProbe for Gradle {
        fn name(&self) -> &str {
            "Gradle"
        }

        fn command(&self) -> &str {
            "gradle"
        }

        fn install_instructions(&self) -> &str {
            "Install Gradle from https://gradle.org/install/"
        }

        fn setup_instructions(&self) -> &str {
            "Run `gradle init` once."
        }

        fn classify(&self) -> PackageManagerClassification {
            PackageManagerClassification {
                status: self.status,
                version: Some("8.5".parse().unwrap()),
                recommended_version: "8.0".to_string(),
                install_instructions: self.install_instructions().to_string(),
                upgrade_instructions: "Run `gradle wrapper --gradle-version latest`.".to_string(),
            }
        }

        fn is_initialized(&self) -> bool {
            self.initialized
        }
    }

    #[test]
    fn other_managers_supply_their_own_instructions() {
        let probe = healthy_xcode().with_tool("gradle");
        let gradle = Gradle {
            status: PackageManagerStatus::Recommended,
            initialized: false,
        };
        let result = XcodeValidator::new(&probe, gradle, "14.0".parse().unwrap()).validate();

        assert_eq!(result.overall(), ValidationType::Partial);
        let last = result.messages().last().unwrap().text();
        assert_eq!(
            last,
            "Gradle 8.5 installed but not initialized.\nRun `gradle init` once."
        );
        assert!(!last.contains("pod setup"));
    }

    #[test]
    fn other_managers_embed_upgrade_text_verbatim() {
        let probe = healthy_xcode().with_tool("gradle");
        let gradle = Gradle {
            status: PackageManagerStatus::Outdated,
            initialized: true,
        };
        let result = XcodeValidator::new(&probe, gradle, "14.0".parse().unwrap()).validate();

        assert!(result
            .messages()
            .last()
            .unwrap()
            .text()
            .ends_with("Run `gradle wrapper --gradle-version latest`."));
    }
}
