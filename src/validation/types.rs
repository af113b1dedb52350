//! Validation status types.
//!
//! Each validator produces a [`ValidationResult`]: one merged
//! [`ValidationType`], the ordered messages shown to the user, and an
//! optional summary such as a detected version.

use serde::Serialize;
use std::fmt;

/// Status of a toolchain dimension, ranked worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationType {
    /// Tool is not installed at all.
    Missing,
    /// Tool is installed but something about it needs attention.
    Partial,
    /// Tool is installed and every check passed.
    Installed,
}

impl ValidationType {
    /// Lowercase name used in plain output and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Partial => "partial",
            Self::Installed => "installed",
        }
    }
}

impl fmt::Display for ValidationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single line of validator output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationMessage {
    text: String,
    is_error: bool,
}

impl ValidationMessage {
    /// Informational message (e.g. "Xcode at /Applications/Xcode.app").
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// Error message describing a gap and how to fix it.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }
}

/// Output of one `validate()` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    #[serde(rename = "status")]
    overall: ValidationType,
    messages: Vec<ValidationMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
}

impl ValidationResult {
    /// Create a result. Validators should go through
    /// [`ValidationPass::finish`](super::ValidationPass::finish) so the
    /// overall status always comes from the merge of their aspects.
    pub fn new(
        overall: ValidationType,
        messages: Vec<ValidationMessage>,
        summary: Option<String>,
    ) -> Self {
        Self {
            overall,
            messages,
            summary,
        }
    }

    pub fn overall(&self) -> ValidationType {
        self.overall
    }

    /// Messages in the order they were produced.
    pub fn messages(&self) -> &[ValidationMessage] {
        &self.messages
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Whether any message is an error.
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(ValidationMessage::is_error)
    }

    /// Number of error messages.
    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_error()).count()
    }
}
