//! Work distribution across worker threads.
//!
//! The URL list is cut into contiguous chunks, one OS thread per chunk, with
//! no coordination between workers beyond shared atomic counters. Output order
//! across workers is unspecified; within a chunk, URLs are handled in input order.

mod outcome;
mod partition;
mod run;
mod summary;

pub use outcome::{UrlOutcome, UrlReport};
pub use partition::{chunk_size, partition};
pub use run::{process_url, run_workers};
pub use summary::RunSummary;

use crate::config::{XrcConfig, DEFAULT_PLACEHOLDER};

/// Options for one distributor run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Requested worker count (at least 1).
    pub workers: usize,
    /// Token written in place of the targeted parameter's value.
    pub placeholder: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            workers: 2,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl From<&XrcConfig> for RunOptions {
    fn from(cfg: &XrcConfig) -> Self {
        Self {
            workers: cfg.threads,
            placeholder: cfg.placeholder.clone(),
        }
    }
}
