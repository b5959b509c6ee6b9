//! HTML document wrapper for selector evaluation and link discovery
//!
//! This module handles parsing fetched HTML and extracting:
//! - The page title
//! - Elements matching a CSS selector (text, outer HTML, attributes)
//! - Anchor hrefs, in document order, for frontier expansion

use crate::output::ExtractedElement;
use crate::PatternError;
use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    /// Parses HTML content
    ///
    /// Parsing never fails: malformed markup is repaired the way a browser
    /// would repair it.
    ///
    /// # Example
    ///
    /// ```
    /// use selector_crawler::crawler::PageDocument;
    ///
    /// let html = r#"<html><head><title>Test</title></head><body><h1>Hi</h1></body></html>"#;
    /// let document = PageDocument::parse(html);
    /// assert_eq!(document.title(), Some("Test".to_string()));
    /// assert_eq!(document.extract("h1").unwrap()[0].text, "Hi");
    /// ```
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// Extracts the page title from the first `<title>` element
    pub fn title(&self) -> Option<String> {
        let title_selector = Selector::parse("title").ok()?;

        self.html
            .select(&title_selector)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Runs a CSS selector against the document
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ElementRef>)` - Matches in document order, possibly empty
    /// * `Err(PatternError)` - The selector does not parse
    pub fn select(&self, pattern: &str) -> Result<Vec<ElementRef<'_>>, PatternError> {
        let selector = Selector::parse(pattern).map_err(|e| PatternError {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        Ok(self.html.select(&selector).collect())
    }

    /// Runs a CSS selector and converts every match to an `ExtractedElement`
    pub fn extract(&self, pattern: &str) -> Result<Vec<ExtractedElement>, PatternError> {
        Ok(self
            .select(pattern)?
            .into_iter()
            .map(extract_element)
            .collect())
    }

    /// Returns the `href` of every `<a href>` element, in document order
    pub fn anchor_hrefs(&self) -> Vec<&str> {
        let Ok(a_selector) = Selector::parse("a[href]") else {
            return Vec::new();
        };

        self.html
            .select(&a_selector)
            .filter_map(|element| element.value().attr("href"))
            .collect()
    }
}

/// Returns the element's text nodes, each trimmed, empty ones dropped,
/// concatenated without a separator
pub fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Converts a matched element into its extracted form
pub fn extract_element(element: ElementRef<'_>) -> ExtractedElement {
    ExtractedElement {
        text: element_text(&element),
        html: element.html(),
        attributes: element
            .value()
            .attrs()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
    }
}

/// Truncates text to at most `max_chars` characters
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
