use crate::{UrlError, UrlResult};
use url::Url;

/// Validates user input before a crawl is started
///
/// Leading and trailing whitespace is ignored. The URL must be absolute and
/// use the `http` or `https` scheme.
///
/// # Examples
///
/// ```
/// use page_trail::url::validate_seed_url;
///
/// let url = validate_seed_url("  https://example.com/blog ").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/blog");
/// assert!(validate_seed_url("").is_err());
/// ```
pub fn validate_seed_url(input: &str) -> UrlResult<Url> {
    let input = input.trim();
    if input.is_empty() {
        return Err(UrlError::Empty);
    }

    let url = Url::parse(input).map_err(|source| UrlError::Parse {
        url: input.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(UrlError::InvalidScheme(other.to_string())),
    }
}
