//! Per-URL expansion error.

use thiserror::Error;

/// Why a single input line produced no candidates.
#[derive(Debug, Error)]
pub enum ExpandError {
    /// The line is not an absolute URL.
    #[error("invalid URL: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl ExpandError {
    /// The input line that failed.
    pub fn url(&self) -> &str {
        match self {
            ExpandError::InvalidUrl { url, .. } => url,
        }
    }
}
