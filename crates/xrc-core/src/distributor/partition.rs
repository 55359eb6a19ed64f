//! Static partitioning of the URL list into contiguous chunks.
//!
//! The stride is computed once as `max(1, total / workers)`, so a list whose
//! length is not a multiple of `workers` produces one extra, shorter chunk.
//! There is no rebalancing: a slow chunk simply finishes later.

/// Chunk length for `total` items across `workers` workers (integer division, at least 1).
pub fn chunk_size(total: usize, workers: usize) -> usize {
    (total / workers.max(1)).max(1)
}

/// Split `urls` into contiguous chunks of `chunk_size(urls.len(), workers)`.
/// Empty input yields no chunks.
pub fn partition(urls: Vec<String>, workers: usize) -> Vec<Vec<String>> {
    let size = chunk_size(urls.len(), workers);
    let mut chunks = Vec::with_capacity(urls.len().div_ceil(size));
    let mut iter = urls.into_iter().peekable();
    while iter.peek().is_some() {
        chunks.push(iter.by_ref().take(size).collect());
    }
    chunks
}
