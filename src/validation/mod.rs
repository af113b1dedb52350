//! Validator aggregation model.
//!
//! Every toolchain dimension is checked by a [`DoctorValidator`]. A validator
//! probes one or more aspects, records messages as it goes, and merges the
//! aspect statuses into one [`ValidationResult`].
//!
//! # Modules
//!
//! - [`types`] - `ValidationType`, `ValidationMessage`, `ValidationResult`
//! - [`merge`] - Equality-collapse reduction of aspect statuses
//! - [`pass`] - Per-call accumulator enforcing the aspect state machine
//!
//! # Example
//!
//! ```
//! use appdoctor::validation::{ValidationPass, ValidationType};
//!
//! let mut pass = ValidationPass::new();
//! let toolchain = pass.aspect("toolchain");
//! let manager = pass.aspect("package-manager");
//! pass.present(toolchain, "Toolchain 15.2 found");
//! pass.absent(manager, "Package manager not installed");
//!
//! let result = pass.finish();
//! assert_eq!(result.overall(), ValidationType::Partial);
//! assert_eq!(result.error_count(), 1);
//! ```

pub mod merge;
pub mod pass;
pub mod types;

pub use merge::{combine, merge, try_merge};
pub use pass::{Aspect, AspectId, ValidationPass};
pub use types::{ValidationMessage, ValidationResult, ValidationType};

/// A check for one toolchain dimension.
///
/// Implementations re-probe the host on every call and must not keep state
/// between calls; build a fresh [`ValidationPass`] inside `validate()`.
pub trait DoctorValidator {
    /// Human-readable title, e.g. "Xcode - develop for iOS and macOS".
    fn title(&self) -> &str;

    /// Probe the host and report. Never fails: absence and
    /// misconfiguration are reported as statuses and messages.
    fn validate(&self) -> ValidationResult;
}
