//! User interface abstraction.
//!
//! Everything the CLI prints goes through [`UserInterface`], so commands can
//! be exercised against [`MockUI`] in tests and rendered by [`TerminalUI`] or
//! [`NonInteractiveUI`] in real runs.

mod icons;
mod mock;
mod non_interactive;
mod output;
mod terminal;
mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, DoctorTheme};

/// Trait for user interface implementations.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Print a plain message.
    fn message(&mut self, msg: &str);

    /// Print a success message.
    fn success(&mut self, msg: &str);

    /// Print a warning message.
    fn warning(&mut self, msg: &str);

    /// Print an error message. Errors are shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Show a section header.
    fn show_header(&mut self, title: &str);

    /// Show a status line: bracketed icon followed by the text.
    fn show_status(&mut self, kind: StatusKind, text: &str);
}
