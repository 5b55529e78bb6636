//! Pagination state owned by a single crawl
use crate::state::ContentRow;
use std::fmt;

/// Why a crawl stopped following pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// The last fetched page had no "next" anchor
    NoNextLink,

    /// The page limit was reached
    PageLimitReached,

    /// A page could not be fetched
    FetchFailed,

    /// A "next" anchor was found but could not be turned into a URL
    InvalidNextLink,

    /// There was no URL to fetch
    MissingUrl,
}

impl StopReason {
    /// Returns true if the crawl ended because of a failure
    pub fn is_error(&self) -> bool {
        matches!(self, Self::FetchFailed | Self::InvalidNextLink)
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NoNextLink => "no next page",
            Self::PageLimitReached => "page limit reached",
            Self::FetchFailed => "fetch failed",
            Self::InvalidNextLink => "invalid next link",
            Self::MissingUrl => "no URL to fetch",
        };
        f.write_str(s)
    }
}

/// Mutable state of one pagination loop
///
/// `pages_visited` counts followed "next" links, which is what the page
/// limit is checked against. `pages_fetched` counts successful fetches.
#[derive(Debug, Clone, Default)]
pub struct CrawlState {
    current_url: Option<String>,
    pages_visited: u32,
    pages_fetched: u32,
    results: Vec<ContentRow>,
}

impl CrawlState {
    /// Creates the state for a crawl starting at `seed_url`
    pub fn new(seed_url: &str) -> Self {
        Self {
            current_url: Some(seed_url.to_string()).filter(|u| !u.is_empty()),
            ..Self::default()
        }
    }

    /// The page the loop is about to fetch
    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    pub fn pages_visited(&self) -> u32 {
        self.pages_visited
    }

    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    pub fn results(&self) -> &[ContentRow] {
        &self.results
    }

    /// Checks the loop condition, returning the URL to fetch next or the
    /// reason to stop
    pub fn next_target(&self, max_pages: u32) -> Result<&str, StopReason> {
        let url = self.current_url.as_deref().ok_or(StopReason::MissingUrl)?;
        if self.limit_reached(max_pages) {
            return Err(StopReason::PageLimitReached);
        }
        Ok(url)
    }

    /// Returns true once `max_pages` next links have been followed
    pub fn limit_reached(&self, max_pages: u32) -> bool {
        self.pages_visited >= max_pages
    }

    /// Records a successful fetch and its extracted rows
    pub fn record_page(&mut self, rows: Vec<ContentRow>) {
        self.pages_fetched += 1;
        self.results.extend(rows);
    }

    /// Counts a "next" link found on the current page
    pub fn count_next_link(&mut self) {
        self.pages_visited += 1;
    }

    /// Moves on to the next page
    pub fn advance(&mut self, next_url: String) {
        self.current_url = Some(next_url).filter(|u| !u.is_empty());
    }

    /// Consumes the state, returning the accumulated rows
    pub fn into_results(self) -> Vec<ContentRow> {
        self.results
    }
}
