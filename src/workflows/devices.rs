//! Physical iOS device provisioning tools.

use crate::probe::{ToolProbe, Version};
use crate::validation::{DoctorValidator, ValidationPass, ValidationResult};

pub const DEVICES_TITLE: &str = "iOS device provisioning";

/// Checks `ios-deploy` and libimobiledevice, used to install and debug
/// apps on physical devices.
pub struct DeviceProvisioningValidator<P> {
    probe: P,
}

impl<P: ToolProbe> DeviceProvisioningValidator<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }
}

impl<P: ToolProbe> DoctorValidator for DeviceProvisioningValidator<P> {
    fn title(&self) -> &str {
        DEVICES_TITLE
    }

    fn validate(&self) -> ValidationResult {
        let mut pass = ValidationPass::new();
        let deploy = pass.aspect("ios-deploy");
        let imobile = pass.aspect("libimobiledevice");

        if self.probe.exists("ios-deploy") {
            let version = self
                .probe
                .stdout_of("ios-deploy", &["--version"])
                .as_deref()
                .and_then(Version::parse);
            match version {
                Some(v) => {
                    pass.present(deploy, format!("ios-deploy {}", v));
                    pass.set_summary(format!("ios-deploy {}", v));
                }
                None => pass.present(deploy, "ios-deploy installed"),
            }
        } else {
            pass.absent(
                deploy,
                "ios-deploy not installed. It is needed to install and debug apps on physical iOS devices.\n\
                 To install with Homebrew, run:\n  \
                 brew install ios-deploy",
            );
        }

        if self.probe.exists("idevice_id") {
            pass.present(imobile, "libimobiledevice found");
            if !self.probe.exists("ideviceinstaller") {
                pass.degrade(
                    imobile,
                    "ideviceinstaller not installed. It is needed to install apps on physical iOS devices.\n\
                     To install with Homebrew, run:\n  \
                     brew install ideviceinstaller",
                );
            }
        } else {
            pass.absent(
                imobile,
                "libimobiledevice not installed. It is needed to discover connected iOS devices.\n\
                 To install with Homebrew, run:\n  \
                 brew install libimobiledevice",
            );
        }

        pass.finish()
    }
}
