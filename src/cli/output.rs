//! Output formatting utilities

use crate::application::AdvanceReport;

/// Format an advancement report for display
pub fn format_advance_report(report: &AdvanceReport) -> String {
    if report.changes.is_empty() {
        return "No documents needed updating.\n".to_string();
    }

    let mut output = String::new();
    for change in &report.changes {
        output.push_str(&format!("{}: {}\n", change.filename, change.tag));
    }

    if report.dry_run {
        output.push_str(&format!(
            "Dry run: {} file(s) would be updated.\n",
            report.changed_files
        ));
    } else {
        output.push_str(&format!("Updated {} file(s).\n", report.changed_files));
    }

    output
}
