//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching
//! - HTML parsing, selector evaluation and link extraction
//! - The breadth-first frontier
//! - Overall crawl coordination and single-page probing

mod coordinator;
mod fetcher;
mod frontier;
mod parser;
mod prober;

pub use coordinator::{crawl, Coordinator};
pub use fetcher::{build_http_client, Fetcher};
pub use frontier::Frontier;
pub use parser::{element_text, extract_element, truncate_chars, PageDocument};
pub use prober::{probe, probe_pattern};

use crate::config::{validate_delay, Config, LimitsConfig, DEFAULT_DELAY_SECS, DEFAULT_MAX_PAGES};
use crate::{ConfigResult, CrawlError};
use std::time::Duration;

/// Bounds for one crawl invocation
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Maximum number of pages fetched; at least 1
    pub max_pages: usize,

    /// Pause before every fetch except the first
    pub delay: Duration,

    pub limits: LimitsConfig,
}

impl CrawlOptions {
    pub fn new(max_pages: usize, delay: Duration) -> Self {
        Self {
            max_pages,
            delay,
            limits: LimitsConfig::default(),
        }
    }

    pub fn with_limits(mut self, limits: LimitsConfig) -> Self {
        self.limits = limits;
        self
    }

    /// Builds options from the `[crawl]` and `[limits]` config sections
    pub fn from_config(config: &Config) -> ConfigResult<Self> {
        let delay = validate_delay(config.crawl.delay_secs)?;
        Ok(Self::new(config.crawl.max_pages, delay).with_limits(config.limits))
    }
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PAGES, Duration::from_secs_f64(DEFAULT_DELAY_SECS))
    }
}

/// Parses the selector list from its JSON-array form
///
/// # Example
///
/// ```
/// use selector_crawler::crawler::parse_selectors;
///
/// let selectors = parse_selectors(r#"["h1", "a.title"]"#).unwrap();
/// assert_eq!(selectors, vec!["h1", "a.title"]);
/// assert!(parse_selectors("not json").is_err());
/// ```
pub fn parse_selectors(raw: &str) -> Result<Vec<String>, CrawlError> {
    serde_json::from_str(raw).map_err(CrawlError::InvalidSelectors)
}
