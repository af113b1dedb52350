//! Non-interactive UI for CI/headless environments.

use super::theme::DoctorTheme;
use super::{OutputMode, StatusKind, UserInterface};

/// UI implementation for piped output and CI logs.
///
/// Never emits colour codes. Warnings and errors go to stderr.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: DoctorTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: DoctorTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        println!("{}\n", self.theme.format_header(title));
    }

    fn show_status(&mut self, kind: StatusKind, text: &str) {
        println!("{}", kind.format(&self.theme, text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_ui_keeps_output_mode() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
