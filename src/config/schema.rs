//! Configuration schema.
//!
//! ```yaml
//! xcode:
//!   minimum_version: "14.0"
//! cocoapods:
//!   recommended_version: "1.13.0"
//! android:
//!   sdk_root: /opt/android-sdk
//!   java_minimum_version: "17"
//! ```
//!
//! Every field is optional; unset fields fall back to built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::probe::Version;

/// Oldest Xcode accepted without a warning.
pub const DEFAULT_XCODE_MINIMUM: &[u64] = &[14, 0];
/// CocoaPods version below which an upgrade is recommended.
pub const DEFAULT_COCOAPODS_RECOMMENDED: &[u64] = &[1, 13, 0];
/// Oldest JDK accepted by the Android Gradle plugin.
pub const DEFAULT_JAVA_MINIMUM: &[u64] = &[17];

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DoctorConfig {
    #[serde(default)]
    pub xcode: XcodeConfig,
    #[serde(default)]
    pub cocoapods: CocoaPodsConfig,
    #[serde(default)]
    pub android: AndroidConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct XcodeConfig {
    pub minimum_version: Option<Version>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CocoaPodsConfig {
    pub recommended_version: Option<Version>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AndroidConfig {
    /// Android SDK root. Falls back to `ANDROID_HOME` when unset.
    pub sdk_root: Option<PathBuf>,
    pub java_minimum_version: Option<Version>,
}

impl DoctorConfig {
    /// Overlay `other` on top of `self`, field by field.
    pub fn merge(self, other: DoctorConfig) -> DoctorConfig {
        DoctorConfig {
            xcode: XcodeConfig {
                minimum_version: other.xcode.minimum_version.or(self.xcode.minimum_version),
            },
            cocoapods: CocoaPodsConfig {
                recommended_version: other
                    .cocoapods
                    .recommended_version
                    .or(self.cocoapods.recommended_version),
            },
            android: AndroidConfig {
                sdk_root: other.android.sdk_root.or(self.android.sdk_root),
                java_minimum_version: other
                    .android
                    .java_minimum_version
                    .or(self.android.java_minimum_version),
            },
        }
    }

    pub fn xcode_minimum_version(&self) -> Version {
        self.xcode
            .minimum_version
            .clone()
            .unwrap_or_else(|| Version::new(DEFAULT_XCODE_MINIMUM.to_vec()))
    }

    pub fn cocoapods_recommended_version(&self) -> Version {
        self.cocoapods
            .recommended_version
            .clone()
            .unwrap_or_else(|| Version::new(DEFAULT_COCOAPODS_RECOMMENDED.to_vec()))
    }

    pub fn java_minimum_version(&self) -> Version {
        self.android
            .java_minimum_version
            .clone()
            .unwrap_or_else(|| Version::new(DEFAULT_JAVA_MINIMUM.to_vec()))
    }

    pub fn android_sdk_root(&self) -> Option<&Path> {
        self.android.sdk_root.as_deref()
    }

    /// Use `android_home` (usually `ANDROID_HOME`) as the SDK root when no
    /// config file set one.
    pub fn with_android_home(mut self, android_home: Option<PathBuf>) -> Self {
        if self.android.sdk_root.is_none() {
            self.android.sdk_root = android_home.filter(|p| !p.as_os_str().is_empty());
        }
        self
    }
}
