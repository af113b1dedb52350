//! Platform workflows and their validators.
//!
//! A [`Workflow`] groups the validators needed for one target platform and
//! decides, from the injected [`HostPlatform`](crate::platform::HostPlatform),
//! whether it applies to this machine at all. Adding a platform means adding
//! a new `Workflow` implementation.
//!
//! # Modules
//!
//! - [`ios`] - iOS workflow (macOS only)
//! - [`xcode`] - Xcode toolchain and CocoaPods validator
//! - [`cocoapods`] - CocoaPods classification
//! - [`devices`] - Physical device provisioning validator
//! - [`android`] - Android workflow and toolchain validator

pub mod android;
pub mod cocoapods;
pub mod devices;
pub mod ios;
pub mod xcode;

pub use android::{AndroidToolchainValidator, AndroidWorkflow};
pub use cocoapods::{
    CocoaPods, PackageManagerClassification, PackageManagerProbe, PackageManagerStatus,
};
pub use devices::DeviceProvisioningValidator;
pub use ios::IosWorkflow;
pub use xcode::XcodeValidator;

use crate::validation::DoctorValidator;

/// A platform-scoped group of validators.
pub trait Workflow {
    /// Short name used by `--workflow` (e.g. "ios").
    fn name(&self) -> &str;

    /// Whether this workflow is relevant on the host platform. Pure: must
    /// not probe the machine.
    fn applies_to_host_platform(&self) -> bool;

    /// Validators to run, in report order. Callers must skip them entirely
    /// when [`applies_to_host_platform`](Self::applies_to_host_platform) is false.
    fn validators(&self) -> Vec<Box<dyn DoctorValidator + '_>>;
}

/// Names accepted by `--workflow`.
pub const WORKFLOW_NAMES: &[&str] = &["ios", "android"];
