//! Android toolchain validation.

use std::path::{Path, PathBuf};

use crate::config::DoctorConfig;
use crate::platform::HostPlatform;
use crate::probe::{ToolProbe, Version};
use crate::validation::{AspectId, DoctorValidator, ValidationPass, ValidationResult};

use super::Workflow;

pub const ANDROID_TITLE: &str = "Android toolchain - develop for Android devices";

/// Directories inside an SDK root that hold the tools this validator probes.
pub fn sdk_tool_dirs(sdk_root: &Path) -> Vec<PathBuf> {
    vec![
        sdk_root.join("platform-tools"),
        sdk_root.join("cmdline-tools").join("latest").join("bin"),
    ]
}

/// Checks the Android SDK and the Java runtime Gradle needs.
pub struct AndroidToolchainValidator<P> {
    probe: P,
    sdk_root: Option<PathBuf>,
    java_minimum: Version,
}

impl<P: ToolProbe> AndroidToolchainValidator<P> {
    pub fn new(probe: P, sdk_root: Option<PathBuf>, java_minimum: Version) -> Self {
        Self {
            probe,
            sdk_root,
            java_minimum,
        }
    }

    fn check_sdk(&self, pass: &mut ValidationPass, sdk: AspectId) {
        if !self.probe.exists("adb") {
            pass.absent(
                sdk,
                "Unable to locate Android SDK.\n\
                 Install Android Studio from https://developer.android.com/studio\n\
                 or set ANDROID_HOME to an existing SDK installation.",
            );
            return;
        }

        match &self.sdk_root {
            Some(root) => {
                pass.present(sdk, format!("Android SDK at {}", root.display()));
                pass.set_summary(root.display().to_string());
            }
            None => pass.present(sdk, "Android Debug Bridge (adb) found"),
        }

        if !self.probe.exists("sdkmanager") {
            pass.degrade(
                sdk,
                "cmdline-tools component is missing.\n\
                 Install the Android SDK Command-line Tools from the SDK Manager in Android Studio.",
            );
        }

        match &self.sdk_root {
            Some(root) => {
                let license = root.join("licenses").join("android-sdk-license");
                if !self.probe.path_exists(&license) {
                    pass.degrade(
                        sdk,
                        "Android license status unknown.\n\
                         Run `sdkmanager --licenses` to accept the SDK licenses.",
                    );
                }
            }
            None => pass.degrade(
                sdk,
                "Could not determine the Android SDK root, so SDK licenses were not checked.\n\
                 Set ANDROID_HOME or android.sdk_root in .appdoctor.yml.",
            ),
        }
    }

    fn check_java(&self, pass: &mut ValidationPass, java: AspectId) {
        if !self.probe.exists("java") {
            pass.absent(
                java,
                format!(
                    "No Java runtime found.\n\
                     Install JDK {} or newer, for example from https://adoptium.net",
                    self.java_minimum
                ),
            );
            return;
        }

        let version = self
            .probe
            .stdout_of("java", &["--version"])
            .as_deref()
            .and_then(Version::parse);
        match &version {
            Some(v) => pass.present(java, format!("Java {}", v)),
            None => pass.present(java, "Java runtime found"),
        }

        match version {
            Some(v) if v.meets(&self.java_minimum) => {}
            Some(v) => pass.degrade(
                java,
                format!(
                    "Java {} is too old; JDK {} or newer is required.",
                    v, self.java_minimum
                ),
            ),
            None => pass.degrade(
                java,
                format!(
                    "Could not determine the Java version (JDK {} or newer is required).",
                    self.java_minimum
                ),
            ),
        }
    }
}

impl<P: ToolProbe> DoctorValidator for AndroidToolchainValidator<P> {
    fn title(&self) -> &str {
        ANDROID_TITLE
    }

    fn validate(&self) -> ValidationResult {
        let mut pass = ValidationPass::new();
        let sdk = pass.aspect("android-sdk");
        let java = pass.aspect("java");

        self.check_sdk(&mut pass, sdk);
        self.check_java(&mut pass, java);

        pass.finish()
    }
}

/// Android development, available on every desktop platform.
pub struct AndroidWorkflow<P> {
    platform: HostPlatform,
    probe: P,
    sdk_root: Option<PathBuf>,
    java_minimum: Version,
}

impl<P: ToolProbe> AndroidWorkflow<P> {
    pub fn new(platform: HostPlatform, probe: P, config: &DoctorConfig) -> Self {
        Self {
            platform,
            probe,
            sdk_root: config.android_sdk_root().map(Path::to_path_buf),
            java_minimum: config.java_minimum_version(),
        }
    }
}

impl<P: ToolProbe> Workflow for AndroidWorkflow<P> {
    fn name(&self) -> &str {
        "android"
    }

    fn applies_to_host_platform(&self) -> bool {
        matches!(
            self.platform,
            HostPlatform::MacOS | HostPlatform::Linux | HostPlatform::Windows
        )
    }

    fn validators(&self) -> Vec<Box<dyn DoctorValidator + '_>> {
        let toolchain: Box<dyn DoctorValidator + '_> = Box::new(AndroidToolchainValidator::new(
            &self.probe,
            self.sdk_root.clone(),
            self.java_minimum.clone(),
        ));
        vec![toolchain]
    }
}
