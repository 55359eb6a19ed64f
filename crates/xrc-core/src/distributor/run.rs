//! Worker threads: one per chunk, each expanding its URLs in input order.

use anyhow::{Context, Result};
use std::sync::mpsc;
use std::sync::Arc;

use crate::expander::expand_url;
use crate::sink::LineSink;

use super::partition::partition;
use super::summary::RunCounters;
use super::{RunOptions, RunSummary, UrlOutcome, UrlReport};

/// Expand one URL and append every candidate to `sink`.
///
/// Never panics on bad input: parse and write failures come back as `UrlOutcome::Failed`.
/// A write failure part way through leaves the earlier candidates in the sink.
pub fn process_url(
    url: &str,
    placeholder: &str,
    sink: &dyn LineSink,
    report_tx: Option<&mpsc::Sender<UrlReport>>,
) -> UrlOutcome {
    let candidates = match expand_url(url, placeholder) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(url, error = %e, "failed to expand url");
            return UrlOutcome::Failed {
                reason: e.to_string(),
            };
        }
    };

    for candidate in &candidates {
        if let Err(e) = sink.append_line(candidate) {
            tracing::warn!(url, error = %e, "failed to write candidate");
            return UrlOutcome::Failed {
                reason: format!("write output: {}", e),
            };
        }
        if let Some(tx) = report_tx {
            let _ = tx.send(UrlReport::Saved {
                url: candidate.clone(),
            });
        }
    }

    tracing::debug!(url, emitted = candidates.len(), "url expanded");
    UrlOutcome::Expanded {
        emitted: candidates.len(),
    }
}

fn report_for(url: String, outcome: &UrlOutcome) -> UrlReport {
    match outcome {
        UrlOutcome::Expanded { emitted } => UrlReport::Processed {
            url,
            emitted: *emitted,
        },
        UrlOutcome::Failed { reason } => UrlReport::Failed {
            url,
            reason: reason.clone(),
        },
    }
}

/// Process every URL exactly once across worker threads and wait for all of them.
///
/// URLs are split into contiguous chunks (see [`partition`]) and each chunk gets
/// its own OS thread, so up to `workers + 1` threads may run. Per-URL failures
/// are counted, never fatal. If `report_tx` is set, workers send a
/// [`UrlReport`] for each candidate written and each URL finished.
pub fn run_workers(
    urls: Vec<String>,
    opts: &RunOptions,
    sink: Arc<dyn LineSink>,
    report_tx: Option<mpsc::Sender<UrlReport>>,
) -> Result<RunSummary> {
    if opts.workers == 0 {
        anyhow::bail!("worker count must be at least 1");
    }

    let total = urls.len();
    let chunks = partition(urls, opts.workers);
    let counters = Arc::new(RunCounters::default());
    tracing::info!(
        total,
        requested = opts.workers,
        chunks = chunks.len(),
        "starting workers"
    );

    let mut handles = Vec::with_capacity(chunks.len());
    let mut spawn_error = None;
    for (id, chunk) in chunks.into_iter().enumerate() {
        let sink = Arc::clone(&sink);
        let counters = Arc::clone(&counters);
        let tx = report_tx.clone();
        let placeholder = opts.placeholder.clone();
        let spawned = std::thread::Builder::new()
            .name(format!("xrc-worker-{}", id))
            .spawn(move || {
                for url in chunk {
                    let outcome = process_url(&url, &placeholder, sink.as_ref(), tx.as_ref());
                    counters.record(&outcome);
                    if let Some(tx) = &tx {
                        let _ = tx.send(report_for(url, &outcome));
                    }
                }
            })
            .with_context(|| format!("spawn worker {}", id));
        match spawned {
            Ok(h) => handles.push(h),
            Err(e) => {
                spawn_error = Some(e);
                break;
            }
        }
    }
    drop(report_tx);

    let workers = handles.len();
    let mut panicked = 0usize;
    for h in handles {
        if h.join().is_err() {
            panicked += 1;
        }
    }

    if let Some(e) = spawn_error {
        return Err(e);
    }
    if panicked > 0 {
        anyhow::bail!("{} worker thread(s) panicked", panicked);
    }

    let summary = counters.summary(total, workers);
    tracing::info!(
        total = summary.total,
        processed = summary.processed,
        failed = summary.failed,
        emitted = summary.emitted,
        "workers finished"
    );
    Ok(summary)
}
