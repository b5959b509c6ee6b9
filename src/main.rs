//! Selector-Crawler main entry point
//!
//! This is the command-line interface. Whatever happens, exactly one JSON
//! object is written to stdout; logs go to stderr.

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use selector_crawler::config::{load_config, validate_delay, Config};
use selector_crawler::crawler::{crawl, parse_selectors, probe, CrawlOptions, Fetcher};
use selector_crawler::output::{to_json_line, FailureOutput};
use selector_crawler::CrawlError;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Selector-Crawler: bounded single-domain crawler with CSS extraction
///
/// `scrape` crawls breadth-first from the URL, staying on its domain, and
/// extracts every selector from every page. `test` fetches only the URL and
/// reports match counts and previews for each selector.
#[derive(Parser, Debug)]
#[command(name = "selector-crawler")]
#[command(version = "1.0.0")]
#[command(about = "Bounded single-domain crawler with CSS selector extraction", long_about = None)]
struct Cli {
    /// Operation to run
    #[arg(long, value_enum)]
    action: Action,

    /// Seed URL for `scrape`, target page for `test`
    #[arg(long)]
    url: String,

    /// JSON array of CSS selectors, e.g. '["h1", "a.title"]'
    #[arg(long)]
    selectors: String,

    /// Maximum number of pages to scrape [default: 10]
    #[arg(long, value_parser = parse_page_cap)]
    max_pages: Option<usize>,

    /// Seconds to wait between page fetches [default: 1]
    #[arg(long, value_parser = parse_delay)]
    delay: Option<Duration>,

    /// Path to an optional TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error logging
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    /// Crawl and extract
    Scrape,
    /// Probe selectors against a single page
    Test,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    std::panic::set_hook(Box::new(|info| {
        emit(&FailureOutput::new(format!("Unexpected error: {}", info)));
    }));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return;
        }
        Err(e) => {
            emit(&FailureOutput::new(e.to_string().trim()));
            return;
        }
    };

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(line) => println!("{}", line),
        Err(e) => {
            tracing::error!("{:#}", e);
            emit(&FailureOutput::new(e.to_string()));
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs are written to stderr so stdout carries only the JSON result.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("selector_crawler=info,warn"),
            1 => EnvFilter::new("selector_crawler=debug,info"),
            2 => EnvFilter::new("selector_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Parses input, loads configuration and dispatches to the action handler
///
/// Every input error is raised here, before any request is sent.
async fn run(cli: Cli) -> anyhow::Result<String> {
    let selectors = parse_selectors(&cli.selectors)?;

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).map_err(CrawlError::from)?
        }
        None => Config::default(),
    };

    let fetcher = Fetcher::new(&config.fetcher).map_err(CrawlError::from)?;

    match cli.action {
        Action::Scrape => {
            handle_scrape(
                &fetcher,
                &cli.url,
                &selectors,
                &config,
                cli.max_pages,
                cli.delay,
            )
            .await
        }
        Action::Test => handle_test(&fetcher, &cli.url, &selectors, &config).await,
    }
}

/// Handles `--action scrape`: the bounded crawl
async fn handle_scrape(
    fetcher: &Fetcher,
    url: &str,
    selectors: &[String],
    config: &Config,
    max_pages: Option<usize>,
    delay: Option<Duration>,
) -> anyhow::Result<String> {
    let mut options = CrawlOptions::from_config(config).map_err(CrawlError::from)?;
    if let Some(max_pages) = max_pages {
        options.max_pages = max_pages;
    }
    if let Some(delay) = delay {
        options.delay = delay;
    }

    let result = crawl(fetcher, url, selectors, &options).await;
    Ok(to_json_line(&result).map_err(CrawlError::from)?)
}

/// Handles `--action test`: the single-page probe
async fn handle_test(
    fetcher: &Fetcher,
    url: &str,
    selectors: &[String],
    config: &Config,
) -> anyhow::Result<String> {
    let result = probe(fetcher, url, selectors, &config.limits).await;
    Ok(to_json_line(&result).map_err(CrawlError::from)?)
}

/// Writes one JSON object to stdout
fn emit<T: Serialize>(value: &T) {
    let line = to_json_line(value).unwrap_or_else(|e| {
        serde_json::json!({
            "success": false,
            "error": format!("Failed to serialize output: {}", e),
        })
        .to_string()
    });
    println!("{}", line);
}

fn parse_page_cap(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("must be a positive integer".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_delay(s: &str) -> Result<Duration, String> {
    let delay = s.trim().parse::<f64>().map_err(|e| e.to_string())?;
    validate_delay(delay).map_err(|e| e.to_string())
}
