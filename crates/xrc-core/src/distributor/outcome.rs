//! Per-URL results and console-facing reports.

/// Result of processing one input URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlOutcome {
    /// The URL parsed; `emitted` candidates were written to the sink.
    Expanded { emitted: usize },
    /// The URL failed to parse, or a candidate could not be written.
    Failed { reason: String },
}

/// Event sent from workers so the caller can print status lines as they happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlReport {
    /// One candidate URL was written.
    Saved { url: String },
    /// An input URL finished successfully.
    Processed { url: String, emitted: usize },
    /// An input URL failed; it is still counted as processed.
    Failed { url: String, reason: String },
}
