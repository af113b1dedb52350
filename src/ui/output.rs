//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show every validator message, including passing ones.
    Verbose,
    /// Show messages only for validators with issues.
    #[default]
    Normal,
    /// Show one line per validator and the final verdict.
    Quiet,
}

impl OutputMode {
    /// Whether messages of passing validators are shown.
    pub fn shows_all_messages(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Whether messages of failing validators are shown.
    pub fn shows_issue_messages(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
