//! Loading the newline-delimited URL list.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a URL list: one URL per line, surrounding whitespace trimmed, blank lines dropped.
///
/// Lines are not validated here; a line that is not a URL fails later, per URL.
pub fn read_url_list(path: &Path) -> Result<Vec<String>> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read url list {}", path.display()))?;
    Ok(parse_url_list(&data))
}

fn parse_url_list(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn trims_and_skips_blank_lines() {
        let urls = parse_url_list("  http://a.test/?x=1  \n\n\t\nhttp://b.test/?y\r\n");
        assert_eq!(urls, vec!["http://a.test/?x=1", "http://b.test/?y"]);
    }

    #[test]
    fn keeps_input_order_and_duplicates() {
        let urls = parse_url_list("http://b.test/?q=1\nhttp://a.test/?q=1\nhttp://b.test/?q=1\n");
        assert_eq!(urls.len(), 3);
        assert_eq!(urls[0], "http://b.test/?q=1");
        assert_eq!(urls[2], "http://b.test/?q=1");
    }

    #[test]
    fn read_url_list_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"http://example.com/page?a=1&b=2\n\nnot a url\n").unwrap();
        f.flush().unwrap();
        let urls = read_url_list(f.path()).unwrap();
        assert_eq!(urls, vec!["http://example.com/page?a=1&b=2", "not a url"]);
    }

    #[test]
    fn read_url_list_missing_file_err() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("urls.txt");
        let err = read_url_list(&missing).unwrap_err();
        assert!(format!("{:#}", err).contains("urls.txt"));
    }
}
