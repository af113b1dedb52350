//! appdoctor - Check that mobile development toolchains are ready to use.
//!
//! appdoctor probes the tools an iOS or Android build needs (Xcode,
//! CocoaPods, device tooling, the Android SDK, Java) and reports, per
//! validator, whether each is installed, partially working, or missing.
//!
//! # Modules
//!
//! - [`validation`] - Result types, the merge rule, and the validator trait
//! - [`probe`] - How validators look at the machine (PATH lookup, commands, files)
//! - [`workflows`] - The iOS and Android workflows and their validators
//! - [`doctor`] - Runs applicable workflows and assembles the report
//! - [`platform`] - Host platform identity
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`ui`] - Terminal output
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use appdoctor::config::DoctorConfig;
//! use appdoctor::doctor::Doctor;
//! use appdoctor::platform::HostPlatform;
//! use appdoctor::probe::FakeProbe;
//! use appdoctor::validation::ValidationType;
//!
//! let probe = FakeProbe::new();
//! let config = DoctorConfig::default();
//! let report = Doctor::standard(HostPlatform::Linux, &probe, &config).run();
//!
//! // iOS is skipped on Linux; Android runs and finds nothing.
//! assert_eq!(report.skipped_workflows, vec!["ios"]);
//! assert_eq!(report.overall, Some(ValidationType::Missing));
//! ```

pub mod cli;
pub mod config;
pub mod doctor;
pub mod error;
pub mod platform;
pub mod probe;
pub mod ui;
pub mod validation;
pub mod workflows;

pub use error::{DoctorError, Result};
