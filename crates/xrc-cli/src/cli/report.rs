//! Colored status lines for worker reports and the final summary.

use console::style;
use std::sync::mpsc::Receiver;
use std::thread::JoinHandle;
use std::time::Duration;
use xrc_core::distributor::{RunSummary, UrlReport};

/// Styled status line for one report, or `None` when `quiet` hides it.
/// Failures are always shown.
pub(super) fn status_line(report: &UrlReport, quiet: bool) -> Option<String> {
    match report {
        UrlReport::Saved { url } if !quiet => {
            Some(style(format!("[SAVED] {}", url)).green().to_string())
        }
        UrlReport::Processed { url, .. } if !quiet => Some(
            style(format!("[INFO] Processed URL: {}", url))
                .blue()
                .to_string(),
        ),
        UrlReport::Failed { url, reason } => Some(
            style(format!("[ERROR] Failed to process URL {}: {}", url, reason))
                .red()
                .to_string(),
        ),
        _ => None,
    }
}

/// Print reports as they arrive until every sender is dropped.
pub(super) fn spawn_printer(rx: Receiver<UrlReport>, quiet: bool) -> JoinHandle<()> {
    std::thread::spawn(move || {
        for report in rx {
            if let Some(line) = status_line(&report, quiet) {
                println!("{}", line);
            }
        }
    })
}

pub(super) fn summary_lines(summary: &RunSummary, elapsed: Duration) -> [String; 2] {
    [
        style(format!(
            "Processing complete! Total: {}, Processed: {}, Failed: {}, Generated: {}",
            summary.total, summary.processed, summary.failed, summary.emitted
        ))
        .red()
        .bold()
        .to_string(),
        style(format!("Time taken: {:.2} seconds", elapsed.as_secs_f64()))
            .bold()
            .to_string(),
    ]
}

pub(super) fn print_summary(summary: &RunSummary, elapsed: Duration) {
    for line in summary_lines(summary, elapsed) {
        println!("{}", line);
    }
}
