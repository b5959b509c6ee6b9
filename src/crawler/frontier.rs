//! Crawl frontier: URLs discovered but not yet fetched
//!
//! The frontier is strictly FIFO, giving breadth-first traversal. A
//! membership set mirrors the queue so a URL already waiting is never queued
//! a second time.

use std::collections::{HashSet, VecDeque};
use url::Url;

/// FIFO queue of URLs awaiting a fetch
#[derive(Debug, Default)]
pub struct Frontier {
    /// URLs in discovery order
    queue: VecDeque<Url>,

    /// Serialized forms of every URL currently in `queue`
    queued: HashSet<String>,
}

impl Frontier {
    /// Creates a frontier holding only the seed URL
    pub fn with_seed(seed: Url) -> Self {
        let mut frontier = Self::default();
        frontier.push(seed);
        frontier
    }

    /// Appends a URL at the back unless it is already queued
    ///
    /// # Returns
    ///
    /// `true` if the URL was added
    pub fn push(&mut self, url: Url) -> bool {
        if !self.queued.insert(url.as_str().to_string()) {
            return false;
        }
        self.queue.push_back(url);
        true
    }

    /// Removes and returns the URL at the front
    pub fn pop(&mut self) -> Option<Url> {
        let url = self.queue.pop_front()?;
        self.queued.remove(url.as_str());
        Some(url)
    }

    /// Returns true if the URL is waiting in the queue
    pub fn contains(&self, url: &str) -> bool {
        self.queued.contains(url)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
