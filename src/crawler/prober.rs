//! Single-page selector probe
//!
//! Fetches one page and reports, per selector, how many elements match and
//! a short preview of their text. Nothing is followed.

use crate::config::LimitsConfig;
use crate::crawler::parser::{element_text, truncate_chars, PageDocument};
use crate::crawler::Fetcher;
use crate::output::{PatternProbe, ProbeResult};
use crate::FetchError;
use url::Url;

/// Probes `patterns` against the page at `url`
///
/// A fetch failure yields a failed `ProbeResult`; a selector that does not
/// parse yields an error entry for that selector only.
pub async fn probe(
    fetcher: &Fetcher,
    url: &str,
    patterns: &[String],
    limits: &LimitsConfig,
) -> ProbeResult {
    let target = match Url::parse(url) {
        Ok(target) => target,
        Err(source) => {
            let e = FetchError::InvalidUrl {
                url: url.to_string(),
                source,
            };
            return ProbeResult::failed(url, e.to_string());
        }
    };

    tracing::info!("Probing {} selectors against {}", patterns.len(), target);

    let body = match fetcher.fetch(&target).await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!("Probe fetch failed: {}", e);
            return ProbeResult::failed(url, e.to_string());
        }
    };

    let document = PageDocument::parse(&body);
    let results = patterns
        .iter()
        .map(|pattern| probe_pattern(&document, pattern, limits))
        .collect();

    ProbeResult::completed(url, document.title().unwrap_or_default(), results)
}

/// Evaluates one selector and builds its match count and previews
pub fn probe_pattern(document: &PageDocument, pattern: &str, limits: &LimitsConfig) -> PatternProbe {
    match document.select(pattern) {
        Ok(elements) => PatternProbe::Matched {
            selector: pattern.to_string(),
            matches: elements.len(),
            preview: elements
                .iter()
                .take(limits.preview_limit)
                .map(|element| truncate_chars(&element_text(element), limits.preview_chars))
                .collect(),
        },
        Err(e) => {
            tracing::warn!("{}", e);
            PatternProbe::Error {
                selector: pattern.to_string(),
                error: e.to_string(),
            }
        }
    }
}
