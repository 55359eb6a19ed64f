//! Integration test: URL file on disk → distributor → append-mode output file.
//!
//! Runs the same input with several worker counts and checks the output holds
//! the same set of lines every time, with no loss and no duplication.

use std::collections::BTreeMap;
use std::sync::Arc;

use tempfile::tempdir;
use xrc_core::distributor::{self, RunOptions};
use xrc_core::input::read_url_list;
use xrc_core::sink::{AppendFileSink, LineSink};

const URL_FILE: &str = "\
http://example.com/page?a=1&b=2

  https://shop.test/search?q=shoes&page=2&sort=
http://example.com/page?x
not a url
http://example.com/static/logo.png
https://api.test/v1/items?id=7&id=8&fields=name,price#top
http://example.com/redirect?next=/home?tab=1&debug
";

fn run_once(workers: usize) -> (distributor::RunSummary, Vec<String>) {
    let dir = tempdir().unwrap();
    let input = dir.path().join("urls.txt");
    std::fs::write(&input, URL_FILE).unwrap();
    let output = dir.path().join("output_reflection.txt");

    let urls = read_url_list(&input).unwrap();
    let sink: Arc<dyn LineSink> = Arc::new(AppendFileSink::new(&output));
    let opts = RunOptions {
        workers,
        ..RunOptions::default()
    };
    let summary = distributor::run_workers(urls, &opts, sink, None).unwrap();

    let content = std::fs::read_to_string(&output).unwrap_or_default();
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
    lines.sort();
    (summary, lines)
}

#[test]
fn output_is_independent_of_worker_count() {
    let (baseline_summary, baseline) = run_once(1);
    for workers in [2, 3, 7, 32] {
        let (summary, lines) = run_once(workers);
        assert_eq!(lines, baseline, "workers={}", workers);
        assert_eq!(summary.emitted, baseline_summary.emitted);
        assert_eq!(summary.processed, baseline_summary.processed);
        assert_eq!(summary.failed, baseline_summary.failed);
    }
}

#[test]
fn counts_and_lines_match_parameter_totals() {
    let (summary, lines) = run_once(2);
    // 2 + 3 + 1 + 0 (invalid) + 0 + 2 + 2
    assert_eq!(summary.total, 7);
    assert_eq!(summary.processed, 7);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.emitted, 10);
    assert_eq!(lines.len(), 10);
    assert!(lines.iter().all(|l| l.matches("{payload}").count() == 1));
}

#[test]
fn expected_candidates_present() {
    let (_, lines) = run_once(3);
    let expected = [
        "http://example.com/page?a={payload}&b=2",
        "http://example.com/page?a=1&b={payload}",
        "http://example.com/page?x={payload}",
        "https://shop.test/search?q=shoes&page=2&sort={payload}",
        "https://api.test/v1/items?id={payload}&fields=name,price#top",
        "https://api.test/v1/items?id=7&fields={payload}#top",
        "http://example.com/redirect?next={payload}&debug=",
        "http://example.com/redirect?next=/home?tab=1&debug={payload}",
    ];
    for e in expected {
        assert!(lines.iter().any(|l| l == e), "missing {}", e);
    }
}

#[test]
fn candidates_per_url_are_counted_once() {
    let (_, lines) = run_once(4);
    let mut per_base: BTreeMap<&str, usize> = BTreeMap::new();
    for line in &lines {
        let base = line.split('?').next().unwrap();
        *per_base.entry(base).or_default() += 1;
    }
    assert_eq!(per_base.get("http://example.com/page"), Some(&3));
    assert_eq!(per_base.get("https://shop.test/search"), Some(&3));
    assert_eq!(per_base.get("http://example.com/static/logo.png"), None);
}

#[test]
fn reruns_append_to_existing_output() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.txt");
    let opts = RunOptions::default();
    for _ in 0..2 {
        let sink: Arc<dyn LineSink> = Arc::new(AppendFileSink::new(&output));
        distributor::run_workers(
            vec!["http://example.com/?a=1".to_string()],
            &opts,
            sink,
            None,
        )
        .unwrap();
    }
    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        content,
        "http://example.com/?a={payload}\nhttp://example.com/?a={payload}\n"
    );
}
