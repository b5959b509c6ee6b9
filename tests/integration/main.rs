//! Integration tests driven by wiremock mock servers

mod fetch_tests;
mod probe_tests;

/// Wraps a body fragment in a minimal HTML page with the given title
pub fn html_page(title: &str, body: &str) -> String {
    format!(
        "<html><head><title>{}</title></head><body>{}</body></html>",
        title, body
    )
}
