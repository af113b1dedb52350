//! Error types for appdoctor operations.
//!
//! This module defines [`DoctorError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing or misconfigured tool is never an error: validators report it
//!   through their [`ValidationResult`](crate::validation::ValidationResult)
//! - Use `DoctorError` for configuration, CLI input, and output failures
//! - Use `anyhow::Error` (via `DoctorError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for appdoctor operations.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Platform name given on the command line is not recognised.
    #[error("Unknown platform: {name} (expected macos, linux or windows)")]
    UnknownPlatform { name: String },

    /// Workflow name given on the command line is not recognised.
    #[error(
        "Unknown workflow: {name} (expected one of: {})",
        crate::workflows::WORKFLOW_NAMES.join(", ")
    )]
    UnknownWorkflow { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization failed.
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DoctorError {
    /// Whether this error came from loading or validating configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            DoctorError::ConfigNotFound { .. }
                | DoctorError::ConfigParseError { .. }
                | DoctorError::ConfigValidationError { .. }
        )
    }
}

/// Result type alias for appdoctor operations.
pub type Result<T> = std::result::Result<T, DoctorError>;
