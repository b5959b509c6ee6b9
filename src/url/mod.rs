//! URL handling module for Selector-Crawler
//!
//! This module provides authority extraction, same-site scoping, and
//! resolution of link hrefs against the page they appear on.

mod domain;
mod resolve;

// Re-export main functions
pub use domain::{extract_authority, same_authority};
pub use resolve::resolve_link;
