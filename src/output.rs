//! CLI output formatting.
//!
//! Nothing is printed while a batch runs. Once every conversion has
//! finished, [`format_summary`] renders the report as `Vec<String>` so it
//! can be tested without I/O, and [`print_summary`] writes it to stdout.
//!
//! # Output Format
//!
//! ```text
//! Converted 5 of 6 variants (1 failed)
//! Failures:
//!     broken.png → xhdpi: Failed to decode res/mdpi/broken.png: ...
//! ```

use crate::batch::BatchReport;
use std::path::Path;

/// Display name for a source file: its file name, or the whole path if it has none.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Format the end-of-run summary: counts, then one line per failure.
pub fn format_summary(report: &BatchReport) -> Vec<String> {
    let mut lines = Vec::new();

    if report.files.is_empty() {
        lines.push("No images found, nothing to convert".to_string());
        return lines;
    }

    let total = report.results.len();
    match report.failed() {
        0 => lines.push(format!("Converted {} of {} variants", total, total)),
        n => lines.push(format!(
            "Converted {} of {} variants ({} failed)",
            report.succeeded(),
            total,
            n
        )),
    }

    if !report.is_success() {
        lines.push("Failures:".to_string());
        for (job, error) in report.failures() {
            lines.push(format!(
                "    {} \u{2192} {}: {}",
                display_name(&job.source),
                job.target,
                error
            ));
        }
    }

    lines
}

/// Print the summary to stdout.
pub fn print_summary(report: &BatchReport) {
    for line in format_summary(report) {
        println!("{}", line);
    }
}
