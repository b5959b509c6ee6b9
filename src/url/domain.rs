use url::Url;

/// Extracts the authority (`host[:port]`) from a URL
///
/// The port is included only when it is explicit and not the scheme's
/// default, so `https://example.com:443/` and `https://example.com/` share
/// the authority `example.com`. Hosts are already lowercased by the parser.
///
/// # Arguments
///
/// * `url` - The URL to extract the authority from
///
/// # Returns
///
/// * `Some(String)` - The authority
/// * `None` - If the URL has no host (`mailto:`, `data:`, ...)
///
/// # Examples
///
/// ```
/// use url::Url;
/// use selector_crawler::url::extract_authority;
///
/// let url = Url::parse("https://EXAMPLE.com/path").unwrap();
/// assert_eq!(extract_authority(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(extract_authority(&url), Some("127.0.0.1:8080".to_string()));
/// ```
pub fn extract_authority(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

/// Returns true if both URLs have a host and their authorities are identical
///
/// Subdomains are distinct sites: `blog.example.com` does not match
/// `example.com`.
pub fn same_authority(a: &Url, b: &Url) -> bool {
    match (extract_authority(a), extract_authority(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
