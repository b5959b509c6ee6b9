use serde::Deserialize;

/// Browser-identifying user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Page cap used when neither the CLI nor the config sets one
pub const DEFAULT_MAX_PAGES: usize = 10;

/// Delay between fetches in seconds
pub const DEFAULT_DELAY_SECS: f64 = 1.0;

/// Main configuration structure for Selector-Crawler
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub crawl: CrawlConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// HTTP fetcher configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// User-Agent header value
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Total request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Crawl bounds, overridable from the command line
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Maximum number of pages fetched per crawl
    #[serde(rename = "max-pages")]
    pub max_pages: usize,

    /// Delay before each fetch after the first (seconds)
    #[serde(rename = "delay-secs")]
    pub delay_secs: f64,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            delay_secs: DEFAULT_DELAY_SECS,
        }
    }
}

/// Truncation limits applied during link discovery and probing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Anchors considered per page when expanding the frontier
    #[serde(rename = "link-limit")]
    pub link_limit: usize,

    /// Matched elements previewed per selector when probing
    #[serde(rename = "preview-limit")]
    pub preview_limit: usize,

    /// Characters kept from each preview text
    #[serde(rename = "preview-chars")]
    pub preview_chars: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            link_limit: 5,
            preview_limit: 3,
            preview_chars: 100,
        }
    }
}
