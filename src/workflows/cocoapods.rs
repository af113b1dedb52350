//! CocoaPods classification.
//!
//! The Xcode validator does not interpret `pod` output itself; it asks a
//! [`PackageManagerProbe`] for a three-way classification and embeds the
//! instruction strings it returns verbatim.

use std::path::PathBuf;

use serde::Serialize;

use crate::probe::{ToolProbe, Version};

pub const COCOAPODS_INSTALL_INSTRUCTIONS: &str = "To install CocoaPods, run:\n  \
    sudo gem install cocoapods\n\
    or with Homebrew:\n  \
    brew install cocoapods\n\
    See https://guides.cocoapods.org/using/getting-started.html#installation";

pub const COCOAPODS_UPGRADE_INSTRUCTIONS: &str = "To upgrade CocoaPods, run:\n  \
    sudo gem install cocoapods\n\
    or with Homebrew:\n  \
    brew upgrade cocoapods";

pub const COCOAPODS_SETUP_INSTRUCTIONS: &str = "To initialize CocoaPods, run:\n  \
    pod setup\n\
    once to finalize the CocoaPods installation.";

/// Tier a package manager install falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageManagerStatus {
    /// Installed at or above the recommended version.
    Recommended,
    /// Binary present but not usable (no parseable version).
    NotInstalled,
    /// Installed below the recommended version.
    Outdated,
}

/// Classification plus the text the validator embeds in its messages.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManagerClassification {
    pub status: PackageManagerStatus,
    pub version: Option<Version>,
    pub recommended_version: String,
    pub install_instructions: String,
    pub upgrade_instructions: String,
}

/// A package manager the doctor can classify.
pub trait PackageManagerProbe {
    /// Display name, e.g. "CocoaPods".
    fn name(&self) -> &str;

    /// The command whose presence decides whether the manager is installed.
    fn command(&self) -> &str;

    /// Install guidance, available without probing.
    fn install_instructions(&self) -> &str;

    /// What to run when the manager is installed but never set up.
    fn setup_instructions(&self) -> &str;

    /// Probe the installed version and classify it.
    fn classify(&self) -> PackageManagerClassification;

    /// Whether first-time setup has been done.
    fn is_initialized(&self) -> bool;
}

/// [`PackageManagerProbe`] for CocoaPods.
#[derive(Debug, Clone)]
pub struct CocoaPods<P> {
    probe: P,
    recommended: Version,
    repos_dir: Option<PathBuf>,
}

impl<P: ToolProbe> CocoaPods<P> {
    /// Classify against `recommended`, with the specs repo at `$CP_REPOS_DIR`
    /// or `~/.cocoapods/repos`.
    pub fn new(probe: P, recommended: Version) -> Self {
        let repos_dir = std::env::var_os("CP_REPOS_DIR")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".cocoapods").join("repos")));
        Self {
            probe,
            recommended,
            repos_dir,
        }
    }

    /// Override where the specs repository is expected.
    pub fn with_repos_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.repos_dir = Some(dir.into());
        self
    }

    fn installed_version(&self) -> Option<Version> {
        let out = self.probe.stdout_of("pod", &["--version"])?;
        Version::parse(&out)
    }
}

impl<P: ToolProbe> PackageManagerProbe for CocoaPods<P> {
    fn name(&self) -> &str {
        "CocoaPods"
    }

    fn command(&self) -> &str {
        "pod"
    }

    fn install_instructions(&self) -> &str {
        COCOAPODS_INSTALL_INSTRUCTIONS
    }

    fn setup_instructions(&self) -> &str {
        COCOAPODS_SETUP_INSTRUCTIONS
    }

    fn classify(&self) -> PackageManagerClassification {
        let version = self.installed_version();
        let status = match &version {
            None => PackageManagerStatus::NotInstalled,
            Some(v) if !v.meets(&self.recommended) => PackageManagerStatus::Outdated,
            Some(_) => PackageManagerStatus::Recommended,
        };
        tracing::debug!(?status, version = ?version, "classified CocoaPods");

        PackageManagerClassification {
            status,
            version,
            recommended_version: self.recommended.to_string(),
            install_instructions: COCOAPODS_INSTALL_INSTRUCTIONS.to_string(),
            upgrade_instructions: COCOAPODS_UPGRADE_INSTRUCTIONS.to_string(),
        }
    }

    fn is_initialized(&self) -> bool {
        self.repos_dir
            .as_deref()
            .is_some_and(|dir| self.probe.path_exists(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::FakeProbe;

    fn recommended() -> Version {
        "1.13.0".parse().unwrap()
    }

    #[test]
    fn current_version_is_recommended() {
        let probe = FakeProbe::new().with_output("pod", &["--version"], 0, "1.15.2\n");
        let pods = CocoaPods::new(&probe, recommended());
        let c = pods.classify();
        assert_eq!(c.status, PackageManagerStatus::Recommended);
        assert_eq!(c.version.unwrap().to_string(), "1.15.2");
        assert_eq!(c.recommended_version, "1.13.0");
    }

    #[test]
    fn exact_recommended_version_is_recommended() {
        let probe = FakeProbe::new().with_output("pod", &["--version"], 0, "1.13.0");
        let c = CocoaPods::new(&probe, recommended()).classify();
        assert_eq!(c.status, PackageManagerStatus::Recommended);
    }

    #[test]
    fn old_version_is_outdated() {
        let probe = FakeProbe::new().with_output("pod", &["--version"], 0, "1.11.3\n");
        let c = CocoaPods::new(&probe, recommended()).classify();
        assert_eq!(c.status, PackageManagerStatus::Outdated);
        assert_eq!(c.upgrade_instructions, COCOAPODS_UPGRADE_INSTRUCTIONS);
    }

    #[test]
    fn failing_pod_is_not_installed() {
        let probe = FakeProbe::new().with_output("pod", &["--version"], 1, "");
        let c = CocoaPods::new(&probe, recommended()).classify();
        assert_eq!(c.status, PackageManagerStatus::NotInstalled);
        assert!(c.version.is_none());
    }

    #[test]
    fn unparseable_output_is_not_installed() {
        let probe = FakeProbe::new().with_output(
            "pod",
            &["--version"],
            0,
            "Ignoring ffi because its extensions are not built",
        );
        let c = CocoaPods::new(&probe, recommended()).classify();
        assert_eq!(c.status, PackageManagerStatus::NotInstalled);
    }

    #[test]
    fn initialized_when_repos_dir_exists() {
        let probe = FakeProbe::new().with_path("/home/dev/.cocoapods/repos");
        let pods = CocoaPods::new(&probe, recommended()).with_repos_dir("/home/dev/.cocoapods/repos");
        assert!(pods.is_initialized());

        let pods = CocoaPods::new(&probe, recommended()).with_repos_dir("/elsewhere");
        assert!(!pods.is_initialized());
    }
}
