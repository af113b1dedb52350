//! iOS development workflow.

use crate::config::DoctorConfig;
use crate::platform::HostPlatform;
use crate::probe::{ToolProbe, Version};
use crate::validation::DoctorValidator;

use super::cocoapods::CocoaPods;
use super::devices::DeviceProvisioningValidator;
use super::xcode::XcodeValidator;
use super::Workflow;

/// iOS development. Only meaningful on macOS.
pub struct IosWorkflow<P> {
    platform: HostPlatform,
    probe: P,
    xcode_minimum: Version,
    cocoapods_recommended: Version,
}

impl<P: ToolProbe> IosWorkflow<P> {
    pub fn new(platform: HostPlatform, probe: P, config: &DoctorConfig) -> Self {
        Self {
            platform,
            probe,
            xcode_minimum: config.xcode_minimum_version(),
            cocoapods_recommended: config.cocoapods_recommended_version(),
        }
    }
}

impl<P: ToolProbe> Workflow for IosWorkflow<P> {
    fn name(&self) -> &str {
        "ios"
    }

    fn applies_to_host_platform(&self) -> bool {
        self.platform == HostPlatform::MacOS
    }

    fn validators(&self) -> Vec<Box<dyn DoctorValidator + '_>> {
        let pods = CocoaPods::new(&self.probe, self.cocoapods_recommended.clone());
        let xcode: Box<dyn DoctorValidator + '_> = Box::new(XcodeValidator::new(
            &self.probe,
            pods,
            self.xcode_minimum.clone(),
        ));
        let devices: Box<dyn DoctorValidator + '_> =
            Box::new(DeviceProvisioningValidator::new(&self.probe));
        vec![xcode, devices]
    }
}
