use url::Url;

/// Resolves a content anchor's `href` against the page that contained it
///
/// Returns `None` when the anchor has no usable `href` (absent or empty) or
/// when the value cannot be joined onto the base. Any scheme is kept, so
/// `mailto:` and `javascript:` links come back unchanged; they are already
/// absolute.
///
/// # Examples
///
/// ```
/// use page_trail::url::resolve_link;
/// use url::Url;
///
/// let page = Url::parse("https://example.com/blog/post").unwrap();
/// assert_eq!(
///     resolve_link("../about", &page).as_deref(),
///     Some("https://example.com/about")
/// );
/// assert_eq!(resolve_link("", &page), None);
/// ```
pub fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    if href.is_empty() {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute) => Some(absolute.to_string()),
        Err(e) => {
            tracing::debug!("Failed to resolve link {:?} against {}: {}", href, base_url, e);
            None
        }
    }
}

/// Resolves a pagination link against the crawl's seed URL
///
/// An empty `href` resolves to the seed itself. Pagination links are
/// always joined onto the seed, never onto the page they were found on.
pub fn resolve_against_seed(href: &str, seed_url: &str) -> Result<Url, url::ParseError> {
    Url::parse(seed_url)?.join(href)
}
