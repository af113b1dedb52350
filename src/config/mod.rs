//! Configuration loading and validation for appdoctor.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading, and validation in [`loader`]
//!
//! # Example
//!
//! ```
//! use appdoctor::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join(".appdoctor.yml"),
//!     "xcode:\n  minimum_version: \"15.0\"\n",
//! )
//! .unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.xcode_minimum_version().to_string(), "15.0");
//! ```
//!
//! # Configuration File Locations
//!
//! appdoctor discovers and merges configuration in this order:
//! 1. User global config (`~/.appdoctor/config.yml`)
//! 2. Project config (`.appdoctor.yml`)
//! 3. File passed with `--config`

pub mod loader;
pub mod schema;

pub use loader::{
    load_config, load_config_file, load_from_paths, parse_config, validate, ConfigPaths,
    PROJECT_CONFIG_FILE,
};
pub use schema::{AndroidConfig, CocoaPodsConfig, DoctorConfig, XcodeConfig};
