//! Run totals shared between workers and returned to the caller.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::UrlOutcome;

/// Final tally for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// URLs handed to the distributor.
    pub total: usize,
    /// URLs processed, successful or not.
    pub processed: usize,
    /// URLs that produced an error.
    pub failed: usize,
    /// Candidate lines written to the sink.
    pub emitted: usize,
    /// Worker threads actually spawned (may be one more than requested).
    pub workers: usize,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.processed.saturating_sub(self.failed)
    }
}

/// Counters updated concurrently by every worker.
#[derive(Debug, Default)]
pub(super) struct RunCounters {
    processed: AtomicUsize,
    failed: AtomicUsize,
    emitted: AtomicUsize,
}

impl RunCounters {
    pub(super) fn record(&self, outcome: &UrlOutcome) {
        match outcome {
            UrlOutcome::Expanded { emitted } => {
                self.emitted.fetch_add(*emitted, Ordering::Relaxed);
            }
            UrlOutcome::Failed { .. } => {
                self.failed.fetch_add(1, Ordering::Relaxed);
            }
        }
        self.processed.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn summary(&self, total: usize, workers: usize) -> RunSummary {
        RunSummary {
            total,
            processed: self.processed.load(Ordering::Acquire),
            failed: self.failed.load(Ordering::Acquire),
            emitted: self.emitted.load(Ordering::Acquire),
            workers,
        }
    }
}
