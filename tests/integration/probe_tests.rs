//! End-to-end tests for the single-page probe

use crate::html_page;
use selector_crawler::config::{FetcherConfig, LimitsConfig};
use selector_crawler::crawler::{probe, Fetcher};
use selector_crawler::output::PatternProbe;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher() -> Fetcher {
    Fetcher::new(&FetcherConfig::default()).expect("Failed to build fetcher")
}

fn selectors(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}

#[tokio::test]
async fn test_probe_counts_and_pattern_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page(
            "Probe Me",
            r#"<h1>Headline</h1><a href="/other">other</a>"#,
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/other"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let url = format!("{}/", server.uri());
    let result = probe(
        &fetcher(),
        &url,
        &selectors(&["h1", "bogus[[["]),
        &LimitsConfig::default(),
    )
    .await;

    assert!(result.success);
    assert_eq!(result.url, url);
    assert_eq!(result.page_title.as_deref(), Some("Probe Me"));

    let results = result.results.as_ref().unwrap();
    assert_eq!(
        results.get("selector_0"),
        Some(&PatternProbe::Matched {
            selector: "h1".to_string(),
            matches: 1,
            preview: vec!["Headline".to_string()],
        })
    );
    match results.get("selector_1") {
        Some(PatternProbe::Error { selector, error }) => {
            assert_eq!(selector, "bogus[[[");
            assert!(!error.is_empty());
        }
        other => panic!("expected a pattern error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_probe_previews_are_bounded() {
    let server = MockServer::start().await;
    let long = "y".repeat(150);
    let items: String = (0..5).map(|_| format!("<li>{}</li>", long)).collect();
    Mock::given(method("GET"))
        .and(path("/list"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page("List", &items)))
        .mount(&server)
        .await;

    let url = format!("{}/list", server.uri());
    let result = probe(&fetcher(), &url, &selectors(&["li"]), &LimitsConfig::default()).await;

    match result.results.unwrap().get("selector_0") {
        Some(PatternProbe::Matched { matches, preview, .. }) => {
            assert_eq!(*matches, 5);
            assert_eq!(preview.len(), 3);
            assert!(preview.iter().all(|p| p.chars().count() == 100));
        }
        other => panic!("expected matches, got {:?}", other),
    }
}

#[tokio::test]
async fn test_probe_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/missing", server.uri());
    let result = probe(&fetcher(), &url, &selectors(&["h1"]), &LimitsConfig::default()).await;

    assert!(!result.success);
    assert_eq!(result.url, url);
    assert!(result.error.as_deref().unwrap_or("").contains("404"));
    assert!(result.results.is_none());

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["success"], serde_json::json!(false));
    assert!(json.get("results").is_none());
}

#[tokio::test]
async fn test_probe_page_without_title() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>bare</p>"))
        .mount(&server)
        .await;

    let url = format!("{}/", server.uri());
    let result = probe(&fetcher(), &url, &selectors(&["p"]), &LimitsConfig::default()).await;

    assert!(result.success);
    assert_eq!(result.page_title.as_deref(), Some(""));
}
