//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, DoctorTheme, NonInteractiveUI, OutputMode, StatusKind, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: DoctorTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            DoctorTheme::new()
        } else {
            DoctorTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }

    /// Create a terminal UI that never emits colour codes.
    pub fn plain(mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            theme: DoctorTheme::plain(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "{}\n", self.theme.format_header(title)).ok();
    }

    fn show_status(&mut self, kind: StatusKind, text: &str) {
        writeln!(self.term, "{}", kind.format(&self.theme, text)).ok();
    }
}

/// Create the appropriate UI based on environment.
///
/// Falls back to [`NonInteractiveUI`] when stdout is not a terminal or when
/// running in CI. `no_color` forces a plain theme.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    if Term::stdout().is_term() && !crate::platform::is_ci() {
        if no_color {
            Box::new(TerminalUI::plain(mode))
        } else {
            Box::new(TerminalUI::new(mode))
        }
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
