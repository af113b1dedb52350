//! Human-readable rendering of a [`DoctorReport`].

use crate::doctor::{DoctorReport, ValidatorReport};
use crate::ui::{StatusKind, UserInterface};
use crate::validation::{ValidationMessage, ValidationType};

/// `title (summary)`, or just the title when there is no summary.
pub fn status_text(report: &ValidatorReport) -> String {
    match report.result.summary() {
        Some(summary) => format!("{} ({})", report.title, summary),
        None => report.title.clone(),
    }
}

/// One validator message, bulleted and indented under its status line.
/// Continuation lines line up with the first line's text.
pub fn message_text(message: &ValidationMessage) -> String {
    let bullet = if message.is_error() { "✗" } else { "•" };
    let mut lines = message.text().lines();
    let mut out = format!("    {} {}", bullet, lines.next().unwrap_or_default());
    for line in lines {
        out.push_str("\n      ");
        out.push_str(line);
    }
    out
}

/// Closing verdict line.
pub fn verdict(report: &DoctorReport) -> String {
    match report.issue_count() {
        0 => "No issues found!".to_string(),
        1 => "Doctor found issues in 1 category.".to_string(),
        n => format!("Doctor found issues in {} categories.", n),
    }
}

/// Print the whole report.
pub fn show_report(ui: &mut dyn UserInterface, report: &DoctorReport) {
    let mode = ui.output_mode();
    ui.show_header(&format!("Doctor summary (platform: {})", report.platform));

    if report.validators.is_empty() {
        ui.message(&format!(
            "No workflows apply to {}; nothing to check.",
            report.platform
        ));
    }

    for validator in &report.validators {
        let status = validator.result.overall();
        ui.show_status(StatusKind::from(status), &status_text(validator));

        let show_messages = mode.shows_all_messages()
            || (mode.shows_issue_messages() && status != ValidationType::Installed);
        if show_messages {
            for message in validator.result.messages() {
                ui.message(&message_text(message));
            }
        }
    }

    if mode.shows_all_messages() {
        for name in &report.skipped_workflows {
            ui.show_status(
                StatusKind::Skipped,
                &format!("{} workflow (not available on {})", name, report.platform),
            );
        }
    }

    ui.message("");
    if report.is_healthy() {
        ui.success(&verdict(report));
    } else {
        ui.warning(&verdict(report));
    }
}
