//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the bounded breadth-first crawl loop:
//! - Managing the frontier queue and the visited set
//! - Pacing fetches with a fixed delay
//! - Extracting selector matches from each fetched page
//! - Expanding the frontier with same-authority links
//!
//! A fetch failure ends the crawl immediately with the records gathered so
//! far. A selector that fails to parse is recorded on the page and the crawl
//! carries on.

use crate::crawler::frontier::Frontier;
use crate::crawler::parser::PageDocument;
use crate::crawler::{CrawlOptions, Fetcher};
use crate::output::{CrawlResult, PageRecord, PatternOutcome};
use crate::url::{extract_authority, resolve_link, same_authority};
use crate::{FetchError, FetchResult};
use std::collections::HashSet;
use std::time::Instant;
use url::Url;

/// Runs a complete crawl from `seed_url`
///
/// This never returns an error: every failure is folded into the returned
/// `CrawlResult`.
///
/// # Arguments
///
/// * `fetcher` - The HTTP fetcher to use
/// * `seed_url` - Where the crawl starts; also fixes the allowed authority
/// * `patterns` - CSS selectors evaluated on every page, in order
/// * `options` - Page cap, delay and link limit
pub async fn crawl(
    fetcher: &Fetcher,
    seed_url: &str,
    patterns: &[String],
    options: &CrawlOptions,
) -> CrawlResult {
    match Coordinator::new(fetcher, seed_url, patterns, options) {
        Ok(coordinator) => coordinator.run().await,
        Err(e) => {
            tracing::error!("Cannot start crawl: {}", e);
            CrawlResult::failed(format!("Request failed: {}", e), Vec::new())
        }
    }
}

/// State of one crawl invocation
pub struct Coordinator<'a> {
    fetcher: &'a Fetcher,
    patterns: &'a [String],
    options: &'a CrawlOptions,
    seed: Url,
    frontier: Frontier,
    visited: HashSet<String>,
    records: Vec<PageRecord>,
}

impl<'a> Coordinator<'a> {
    /// Creates a coordinator with the seed URL as the only frontier entry
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(FetchError::InvalidUrl)` - The seed URL does not parse
    pub fn new(
        fetcher: &'a Fetcher,
        seed_url: &str,
        patterns: &'a [String],
        options: &'a CrawlOptions,
    ) -> FetchResult<Self> {
        let seed = Url::parse(seed_url).map_err(|source| FetchError::InvalidUrl {
            url: seed_url.to_string(),
            source,
        })?;

        Ok(Self {
            fetcher,
            patterns,
            options,
            frontier: Frontier::with_seed(seed.clone()),
            seed,
            visited: HashSet::new(),
            records: Vec::new(),
        })
    }

    /// Runs the crawl loop to completion and shapes the result
    pub async fn run(mut self) -> CrawlResult {
        tracing::info!(
            "Starting crawl of {} (max {} pages, {} selectors)",
            self.seed,
            self.options.max_pages,
            self.patterns.len()
        );
        let start_time = Instant::now();

        match self.crawl_loop().await {
            Ok(()) => {
                tracing::info!(
                    "Crawl completed: {} pages scraped in {:?}",
                    self.records.len(),
                    start_time.elapsed()
                );
                CrawlResult::completed(self.records)
            }
            Err(e) => {
                tracing::error!(
                    "Crawl aborted after {} pages: {}",
                    self.records.len(),
                    e
                );
                CrawlResult::failed(format!("Request failed: {}", e), self.records)
            }
        }
    }

    async fn crawl_loop(&mut self) -> FetchResult<()> {
        while self.records.len() < self.options.max_pages {
            let Some(url) = self.frontier.pop() else {
                tracing::debug!("Frontier is empty");
                break;
            };

            if !self.visited.insert(url.as_str().to_string()) {
                continue;
            }

            if !self.records.is_empty() && !self.options.delay.is_zero() {
                tokio::time::sleep(self.options.delay).await;
            }

            tracing::debug!("Fetching {}", url);
            let body = self.fetcher.fetch(&url).await?;

            let links = self.process_page(&url, &body);

            if self.records.len() < self.options.max_pages {
                self.enqueue_links(links);
            }
        }

        Ok(())
    }

    /// Extracts a page record and returns the candidate links found on it
    ///
    /// Only the first `link_limit` anchors are considered; anchors whose href
    /// does not resolve still use up a slot.
    fn process_page(&mut self, url: &Url, body: &str) -> Vec<Url> {
        let document = PageDocument::parse(body);

        let content = self
            .patterns
            .iter()
            .map(|pattern| {
                let outcome = document.extract(pattern);
                if let Err(e) = &outcome {
                    tracing::warn!("{} on {}", e, url);
                }
                PatternOutcome::from(outcome)
            })
            .collect();

        self.records.push(PageRecord {
            url: url.to_string(),
            domain: extract_authority(url).unwrap_or_default(),
            title: document.title().unwrap_or_default(),
            content,
        });

        document
            .anchor_hrefs()
            .into_iter()
            .take(self.options.limits.link_limit)
            .filter_map(|href| resolve_link(href, url))
            .collect()
    }

    fn enqueue_links(&mut self, links: Vec<Url>) {
        for link in links {
            if !same_authority(&link, &self.seed) {
                tracing::trace!("Skipping off-site link {}", link);
                continue;
            }

            if self.visited.contains(link.as_str()) || self.frontier.contains(link.as_str()) {
                continue;
            }

            tracing::debug!("Queued {}", link);
            self.frontier.push(link);
        }
    }
}
