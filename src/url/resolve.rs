use url::Url;

/// Resolves a link href to an absolute URL relative to the page it came from
///
/// Resolution follows URL-join semantics: relative paths, absolute paths,
/// protocol-relative and fully-qualified hrefs are all accepted, and the
/// fragment is kept. Returns None if the href cannot be resolved. Scheme
/// filtering is left to the caller's authority check, since `mailto:` and
/// `javascript:` URLs have no host.
pub fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    base_url.join(href.trim()).ok()
}
