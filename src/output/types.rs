use crate::output::SelectorMap;
use crate::PatternError;
use serde::Serialize;
use std::collections::BTreeMap;

/// One element matched by a pattern on a page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedElement {
    /// Trimmed text nodes of the element, concatenated
    pub text: String,

    /// Outer HTML of the element
    pub html: String,

    /// Attribute name to value
    pub attributes: BTreeMap<String, String>,
}

/// Outcome of evaluating one pattern against one page
///
/// Serializes either as a (possibly empty) list of elements or as
/// `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PatternOutcome {
    Elements(Vec<ExtractedElement>),
    Error { error: String },
}

impl PatternOutcome {
    /// Returns the matched elements, or None for a pattern error
    pub fn elements(&self) -> Option<&[ExtractedElement]> {
        match self {
            Self::Elements(elements) => Some(elements),
            Self::Error { .. } => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl From<Result<Vec<ExtractedElement>, PatternError>> for PatternOutcome {
    fn from(result: Result<Vec<ExtractedElement>, PatternError>) -> Self {
        match result {
            Ok(elements) => Self::Elements(elements),
            Err(e) => Self::Error {
                error: e.to_string(),
            },
        }
    }
}

/// Extraction record for one fetched page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRecord {
    pub url: String,

    /// Authority of `url`
    pub domain: String,

    /// Document title, empty when the page has none
    pub title: String,

    /// One entry per input pattern, in input order
    pub content: SelectorMap<PatternOutcome>,
}

/// Result of a full crawl
#[derive(Debug, Clone, Serialize)]
pub struct CrawlResult {
    pub success: bool,

    /// Page records gathered, in fetch order (partial on failure)
    pub data: Vec<PageRecord>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages_scraped: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CrawlResult {
    /// Builds the result for a crawl that ran to completion
    pub fn completed(data: Vec<PageRecord>) -> Self {
        let pages_scraped = data.len();
        Self {
            success: true,
            data,
            pages_scraped: Some(pages_scraped),
            message: Some(format!("Successfully scraped {} pages", pages_scraped)),
            error: None,
        }
    }

    /// Builds the result for a crawl aborted by an error, keeping the
    /// records gathered before it
    pub fn failed(error: impl Into<String>, data: Vec<PageRecord>) -> Self {
        Self {
            success: false,
            data,
            pages_scraped: None,
            message: None,
            error: Some(error.into()),
        }
    }
}

/// Probe outcome for one pattern
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PatternProbe {
    Matched {
        selector: String,
        matches: usize,
        preview: Vec<String>,
    },
    Error {
        selector: String,
        error: String,
    },
}

impl PatternProbe {
    pub fn selector(&self) -> &str {
        match self {
            Self::Matched { selector, .. } | Self::Error { selector, .. } => selector,
        }
    }
}

/// Result of probing patterns against a single page
#[derive(Debug, Clone, Serialize)]
pub struct ProbeResult {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<SelectorMap<PatternProbe>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    pub url: String,
}

impl ProbeResult {
    pub fn completed(
        url: impl Into<String>,
        page_title: String,
        results: SelectorMap<PatternProbe>,
    ) -> Self {
        Self {
            success: true,
            results: Some(results),
            page_title: Some(page_title),
            error: None,
            url: url.into(),
        }
    }

    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            results: None,
            page_title: None,
            error: Some(error.into()),
            url: url.into(),
        }
    }
}

/// Generic top-level failure: bad input or an unexpected error
#[derive(Debug, Clone, Serialize)]
pub struct FailureOutput {
    pub success: bool,
    pub error: String,
}

impl FailureOutput {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
