//! Pure formatting functions for UI output.
//!
//! Everything printed to the user outside of prompts goes through here.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::release::{PipelineReport, StepStatus};
use crate::strip::StripReport;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the version change about to be applied.
///
/// Shows either:
/// - If bumping: "From: old -> To: new"
/// - If starting fresh: "Initial version: new"
pub fn display_proposed_version(baseline: Option<&str>, tag: &str, number: &str) {
    match baseline {
        Some(old) => {
            println!("\n{}", style("Proposed Version Change:").bold());
            println!("  From: {}", style(old).red());
            println!("  To:   {} ({})", style(tag).green(), number);
        }
        None => {
            println!("\n{}", style("Initial Version:").bold());
            println!("  New tag: {} ({})", style(tag).green(), number);
        }
    }
}

/// Display one line per pipeline step.
pub fn display_pipeline_report(report: &PipelineReport) {
    for outcome in &report.outcomes {
        match &outcome.status {
            StepStatus::Done => display_success(outcome.step.name()),
            StepStatus::Failed(e) => display_error(&format!("{}: {}", outcome.step, e)),
            StepStatus::Skipped => println!("  {} {}", style("-").dim(), style(outcome.step).dim()),
        }
    }
}

/// Summarise a log-stripping pass.
pub fn format_strip_report(report: &StripReport) -> String {
    format!(
        "Commented out {} console.log call(s) in {} of {} file(s)",
        report.calls_commented, report.files_changed, report.files_scanned
    )
}
