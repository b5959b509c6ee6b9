//! Configuration module for Selector-Crawler
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every section is optional; missing keys fall back to
//! the built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use selector_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawler.toml")).unwrap();
//! println!("Fetch timeout: {}s", config.fetcher.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlConfig, FetcherConfig, LimitsConfig, DEFAULT_DELAY_SECS, DEFAULT_MAX_PAGES,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::{validate, validate_delay};
