//! Output sink for generated URLs.
//!
//! Workers share one sink. The file-backed sink opens, appends and closes the
//! output file on every line, so no handle or lock is held across workers.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Destination for generated URL lines. Shared by reference across worker threads.
pub trait LineSink: Send + Sync {
    /// Append `line` followed by a newline.
    fn append_line(&self, line: &str) -> io::Result<()>;
}

/// Appends lines to a file, creating it if absent.
#[derive(Debug, Clone)]
pub struct AppendFileSink {
    path: PathBuf,
}

impl AppendFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSink for AppendFileSink {
    fn append_line(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        // One write per line keeps each append whole under O_APPEND.
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        file.write_all(buf.as_bytes())
    }
}
