use crate::config::types::{Config, CrawlConfig, FetcherConfig, LimitsConfig};
use crate::ConfigError;
use reqwest::header::HeaderValue;
use std::time::Duration;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetcher_config(&config.fetcher)?;
    validate_crawl_config(&config.crawl)?;
    validate_limits_config(&config.limits)?;
    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if HeaderValue::from_str(&config.user_agent).is_err() {
        return Err(ConfigError::Validation(format!(
            "user-agent is not a valid header value: '{}'",
            config.user_agent
        )));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates crawl bounds
fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max-pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    validate_delay(config.delay_secs)?;
    Ok(())
}

/// Validates a delay in seconds and converts it to a `Duration`
///
/// The delay must be finite, non-negative and small enough to be
/// represented as a `Duration`.
pub fn validate_delay(delay_secs: f64) -> Result<Duration, ConfigError> {
    if delay_secs < 0.0 {
        return Err(ConfigError::Validation(format!(
            "delay must be a non-negative number of seconds, got {}",
            delay_secs
        )));
    }

    Duration::try_from_secs_f64(delay_secs).map_err(|_| {
        ConfigError::Validation(format!("delay is out of range: {} seconds", delay_secs))
    })
}

fn validate_limits_config(config: &LimitsConfig) -> Result<(), ConfigError> {
    if config.preview_chars < 1 {
        return Err(ConfigError::Validation(
            "preview-chars must be >= 1".to_string(),
        ));
    }

    Ok(())
}
