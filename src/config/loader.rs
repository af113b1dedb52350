//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! various locations in the correct priority order.

use crate::config::schema::DoctorConfig;
use crate::error::{DoctorError, Result};
use crate::probe::Version;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the per-project config.
pub const PROJECT_CONFIG_FILE: &str = ".appdoctor.yml";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.appdoctor/config.yml`)
/// 2. Project config (`.appdoctor.yml`)
/// 3. Explicit `--config` file
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.appdoctor/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .appdoctor.yml
    pub project: Option<PathBuf>,

    /// File named on the command line. Must exist.
    pub explicit: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path, explicit: Option<&Path>) -> Self {
        Self {
            user_global: Self::find_user_global(),
            project: Self::find_project_config(project_root),
            explicit: explicit.map(Path::to_path_buf),
        }
    }

    /// Find user's global config at ~/.appdoctor/config.yml
    fn find_user_global() -> Option<PathBuf> {
        let path = dirs::home_dir()?.join(".appdoctor").join("config.yml");
        path.exists().then_some(path)
    }

    /// Find project config at .appdoctor.yml
    fn find_project_config(project_root: &Path) -> Option<PathBuf> {
        let path = project_root.join(PROJECT_CONFIG_FILE);
        path.exists().then_some(path)
    }

    /// Returns all config paths in merge order.
    pub fn all(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.explicit]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<DoctorConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DoctorError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DoctorError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into DoctorConfig.
///
/// An empty document yields the default config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<DoctorConfig> {
    if content.trim().is_empty() {
        return Ok(DoctorConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| DoctorError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge the files in `paths`, then validate the result.
pub fn load_from_paths(paths: &ConfigPaths) -> Result<DoctorConfig> {
    let mut config = DoctorConfig::default();
    for path in paths.all() {
        tracing::debug!("Loading config from {}", path.display());
        config = config.merge(load_config_file(path)?);
    }
    validate(&config)?;
    Ok(config)
}

/// Discover, load and merge configuration for a project.
///
/// Having no config files at all is fine; built-in defaults apply.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<DoctorConfig> {
    load_from_paths(&ConfigPaths::discover(project_root, explicit))
}

/// Check semantic constraints serde cannot express.
pub fn validate(config: &DoctorConfig) -> Result<()> {
    if let Some(root) = config.android_sdk_root() {
        if !root.is_absolute() {
            return Err(DoctorError::ConfigValidationError {
                message: format!("android.sdk_root must be absolute: {}", root.display()),
            });
        }
    }

    let floors = [
        ("xcode.minimum_version", config.xcode.minimum_version.as_ref()),
        (
            "cocoapods.recommended_version",
            config.cocoapods.recommended_version.as_ref(),
        ),
        (
            "android.java_minimum_version",
            config.android.java_minimum_version.as_ref(),
        ),
    ];
    for (field, version) in floors {
        if let Some(v) = version {
            if *v == Version::new(vec![0]) {
                return Err(DoctorError::ConfigValidationError {
                    message: format!("{} must be greater than 0", field),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn discover_finds_project_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_CONFIG_FILE), "").unwrap();

        let paths = ConfigPaths::discover(temp.path(), None);
        assert_eq!(paths.project, Some(temp.path().join(PROJECT_CONFIG_FILE)));
    }

    #[test]
    fn discover_without_project_config() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::discover(temp.path(), None);
        assert!(paths.project.is_none());
        assert!(paths.explicit.is_none());
    }

    #[test]
    fn empty_file_is_default_config() {
        let config = parse_config("   \n", Path::new("empty.yml")).unwrap();
        assert_eq!(config, DoctorConfig::default());
    }

    #[test]
    fn parse_error_names_file() {
        let err = parse_config("xcode: [", Path::new("/p/.appdoctor.yml")).unwrap_err();
        assert!(matches!(err, DoctorError::ConfigParseError { .. }));
        assert!(err.to_string().contains("/p/.appdoctor.yml"));
    }

    #[test]
    fn unquoted_float_versions_are_parse_errors() {
        let yaml = "cocoapods:\n  recommended_version: 1.10\nxcode:\n  minimum_version: 14.10\n";
        let err = parse_config(yaml, Path::new("/p/.appdoctor.yml")).unwrap_err();
        assert!(matches!(err, DoctorError::ConfigParseError { .. }));
        assert!(err.to_string().contains("must be quoted"));
    }

    #[test]
    fn quoted_versions_keep_every_component() {
        let yaml =
            "cocoapods:\n  recommended_version: \"1.10\"\nxcode:\n  minimum_version: \"14.10\"\n";
        let config = parse_config(yaml, Path::new("/p/.appdoctor.yml")).unwrap();
        assert_eq!(config.cocoapods_recommended_version().to_string(), "1.10");
        assert_eq!(config.xcode_minimum_version().to_string(), "14.10");
    }

    #[test]
    fn missing_explicit_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths {
            explicit: Some(temp.path().join("nope.yml")),
            ..Default::default()
        };
        let err = load_from_paths(&paths).unwrap_err();
        assert!(matches!(err, DoctorError::ConfigNotFound { .. }));
    }

    #[test]
    fn explicit_overrides_project() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join(PROJECT_CONFIG_FILE);
        let explicit = temp.path().join("ci.yml");
        fs::write(
            &project,
            "xcode:\n  minimum_version: \"14.3\"\ncocoapods:\n  recommended_version: \"1.12.0\"\n",
        )
        .unwrap();
        fs::write(&explicit, "xcode:\n  minimum_version: \"15.0\"\n").unwrap();

        let paths = ConfigPaths {
            user_global: None,
            project: Some(project),
            explicit: Some(explicit),
        };
        let config = load_from_paths(&paths).unwrap();
        assert_eq!(config.xcode_minimum_version().to_string(), "15.0");
        assert_eq!(config.cocoapods_recommended_version().to_string(), "1.12.0");
    }

    #[test]
    fn relative_sdk_root_is_rejected() {
        let config: DoctorConfig =
            serde_yaml::from_str("android:\n  sdk_root: android-sdk\n").unwrap();
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, DoctorError::ConfigValidationError { .. }));
    }

    #[test]
    fn zero_version_floor_is_rejected() {
        let config: DoctorConfig =
            serde_yaml::from_str("xcode:\n  minimum_version: \"0\"\n").unwrap();
        assert!(validate(&config).is_err());
    }
}
