//! CLI for XRC, the reflection candidate generator.

mod banner;
mod report;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::time::Instant;
use xrc_core::config::{self, XrcConfig};
use xrc_core::distributor::{self, RunOptions};
use xrc_core::input::read_url_list;
use xrc_core::sink::{AppendFileSink, LineSink};

/// Top-level CLI: one run over one URL file.
#[derive(Debug, Parser)]
#[command(name = "xrc", version)]
#[command(
    about = "XRC: write one candidate URL per query parameter, with that parameter's value set to a placeholder",
    long_about = None
)]
pub struct Cli {
    /// Path to the file containing URLs, one per line.
    pub urls_file: PathBuf,

    /// Number of worker threads (config default: 2).
    #[arg(long, value_name = "N", value_parser = parse_threads)]
    pub threads: Option<usize>,

    /// Output file, appended to and created if absent (config default: output_reflection.txt).
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Token written in place of the targeted parameter's value (config default: {payload}).
    #[arg(long, value_name = "TOKEN")]
    pub placeholder: Option<String>,

    /// Read settings from this TOML file instead of ~/.config/xrc/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only print errors and the final summary.
    #[arg(long, short)]
    pub quiet: bool,

    /// Skip the startup banner.
    #[arg(long)]
    pub no_banner: bool,
}

fn parse_threads(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a whole number", s))?;
    if n == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(n)
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        let cfg = cli.apply_overrides(cfg);
        cfg.validate()?;
        cli.run(cfg)
    }

    /// Command-line flags win over config values.
    pub fn apply_overrides(&self, mut cfg: XrcConfig) -> XrcConfig {
        if let Some(threads) = self.threads {
            cfg.threads = threads;
        }
        if let Some(output) = &self.output {
            cfg.output = output.clone();
        }
        if let Some(placeholder) = &self.placeholder {
            cfg.placeholder = placeholder.clone();
        }
        cfg
    }

    fn run(&self, cfg: XrcConfig) -> Result<()> {
        let urls = read_url_list(&self.urls_file)?;

        if !self.no_banner {
            banner::print_banner();
        }

        tracing::info!(
            input = %self.urls_file.display(),
            output = %cfg.output.display(),
            urls = urls.len(),
            threads = cfg.threads,
            "run started"
        );

        let start = Instant::now();
        let (tx, rx) = mpsc::channel();
        let printer = report::spawn_printer(rx, self.quiet);

        let sink: Arc<dyn LineSink> = Arc::new(AppendFileSink::new(&cfg.output));
        let result = distributor::run_workers(urls, &RunOptions::from(&cfg), sink, Some(tx));
        // The sender is gone once run_workers returns, so the printer drains and exits.
        let _ = printer.join();
        let summary = result?;

        report::print_summary(&summary, start.elapsed());
        Ok(())
    }
}
