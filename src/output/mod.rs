//! Output module for shaping crawl and probe results
//!
//! Every result type here serializes to the JSON object written to stdout.
//! Field names are part of the output contract.

mod selector_map;
mod types;

pub use selector_map::{selector_key, SelectorMap};
pub use types::{
    CrawlResult, ExtractedElement, FailureOutput, PageRecord, PatternOutcome, PatternProbe,
    ProbeResult,
};

use serde::Serialize;

/// Serializes any result to a single line of JSON
pub fn to_json_line<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}
