//! Host platform identity.
//!
//! Workflows never read the OS themselves; they are handed a
//! [`HostPlatform`] so applicability checks are pure and testable.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::DoctorError;

/// Operating system the doctor is checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostPlatform {
    MacOS,
    Linux,
    Windows,
}

impl HostPlatform {
    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            HostPlatform::MacOS
        } else if cfg!(target_os = "windows") {
            HostPlatform::Windows
        } else {
            HostPlatform::Linux
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HostPlatform::MacOS => "macos",
            HostPlatform::Linux => "linux",
            HostPlatform::Windows => "windows",
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HostPlatform {
    type Err = DoctorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "macos" | "darwin" | "osx" => Ok(HostPlatform::MacOS),
            "linux" => Ok(HostPlatform::Linux),
            "windows" | "win32" => Ok(HostPlatform::Windows),
            _ => Err(DoctorError::UnknownPlatform {
                name: s.to_string(),
            }),
        }
    }
}

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "BUILDKITE", "JENKINS_URL"]
        .iter()
        .any(|var| std::env::var_os(var).is_some())
}
