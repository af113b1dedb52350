//! Status icons for validator results.

use super::theme::DoctorTheme;
use crate::validation::ValidationType;

/// Canonical status kinds used in doctor output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Everything installed.
    Success,
    /// Installed with issues.
    Warning,
    /// Not installed.
    Failed,
    /// Not applicable on this platform.
    Skipped,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Warning => "!",
            Self::Failed => "✗",
            Self::Skipped => "○",
        }
    }

    /// Styled, bracketed icon string using the given theme.
    pub fn styled(self, theme: &DoctorTheme) -> String {
        let icon = format!("[{}]", self.icon());
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Skipped => theme.dim.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &DoctorTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }
}

impl From<ValidationType> for StatusKind {
    fn from(status: ValidationType) -> Self {
        match status {
            ValidationType::Installed => Self::Success,
            ValidationType::Partial => Self::Warning,
            ValidationType::Missing => Self::Failed,
        }
    }
}
