//! Tests for the HTTP fetcher against a mock server

use selector_crawler::config::{FetcherConfig, DEFAULT_USER_AGENT};
use selector_crawler::crawler::Fetcher;
use selector_crawler::FetchError;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn endpoint(server: &MockServer, route: &str) -> Url {
    Url::parse(&format!("{}{}", server.uri(), route)).expect("Failed to parse mock URL")
}

#[tokio::test]
async fn test_sends_browser_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        // Header values may be split on commas; each part must match
        .and(header_regex("user-agent", r"Mozilla/5\.0|Chrome/91"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .expect(1)
        .mount(&server)
        .await;

    let config = FetcherConfig::default();
    assert_eq!(config.user_agent, DEFAULT_USER_AGENT);

    let fetcher = Fetcher::new(&config).unwrap();
    let body = fetcher.fetch(&endpoint(&server, "/")).await.unwrap();
    assert_eq!(body, "hello");
}

#[tokio::test]
async fn test_custom_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "TestBot/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let config = FetcherConfig {
        user_agent: "TestBot/2.0".to_string(),
        ..FetcherConfig::default()
    };
    let fetcher = Fetcher::new(&config).unwrap();
    assert!(fetcher.fetch(&endpoint(&server, "/any")).await.is_ok());
}

#[tokio::test]
async fn test_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(&FetcherConfig::default()).unwrap();
    let err = fetcher.fetch(&endpoint(&server, "/down")).await.unwrap_err();

    match &err {
        FetchError::Status { status, url } => {
            assert_eq!(status.as_u16(), 503);
            assert!(url.ends_with("/down"));
        }
        other => panic!("expected a status error, got {:?}", other),
    }
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_follows_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/new"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(&FetcherConfig::default()).unwrap();
    let body = fetcher.fetch(&endpoint(&server, "/old")).await.unwrap();
    assert_eq!(body, "moved");
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = FetcherConfig {
        timeout_secs: 1,
        ..FetcherConfig::default()
    };
    let fetcher = Fetcher::new(&config).unwrap();
    let err = fetcher.fetch(&endpoint(&server, "/slow")).await.unwrap_err();
    assert!(matches!(err, FetchError::Timeout { .. }), "got {:?}", err);
}

#[tokio::test]
async fn test_connection_refused() {
    // Bind then drop a listener to get a port nothing is serving on
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let url = Url::parse(&format!("http://127.0.0.1:{}/", port)).unwrap();

    let fetcher = Fetcher::new(&FetcherConfig::default()).unwrap();
    let err = fetcher.fetch(&url).await.unwrap_err();
    assert!(matches!(err, FetchError::Network { .. }), "got {:?}", err);
}
