//! Selector-Crawler: bounded single-domain crawling with CSS extraction
//!
//! This crate runs a breadth-first crawl from a seed URL, staying on the seed's
//! authority, and extracts elements matching user-supplied CSS selectors from
//! every fetched page. It can also probe a set of selectors against a single
//! page before committing to a full crawl.

pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Selector-Crawler operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid JSON format for selectors")]
    InvalidSelectors(#[source] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors raised while fetching a page
///
/// Any of these aborts the enclosing crawl. The display text is what ends up
/// in the `error` field of a failure result.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("{source}")]
    Network { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for url: {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

/// A selection pattern that could not be evaluated
#[derive(Debug, Clone, Error)]
#[error("Invalid selector '{pattern}': {message}")]
pub struct PatternError {
    pub pattern: String,
    pub message: String,
}

/// Result type alias for Selector-Crawler operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, parse_selectors, probe, CrawlOptions, Fetcher};
pub use output::{CrawlResult, PageRecord, ProbeResult};
pub use crate::url::{extract_authority, same_authority};
