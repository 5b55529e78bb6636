//! Crawl results handed back to the caller

use crate::state::{ContentRow, StopReason};
use crate::FetchError;
use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;

/// Notice shown when a crawl finished without producing any rows
pub const NO_CONTENT_MESSAGE: &str = "No relevant content found.";

/// A non-fatal problem that ended the pagination early
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlWarning {
    /// The page that could not be scraped
    pub url: String,

    /// The underlying error message
    pub message: String,
}

impl CrawlWarning {
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            message: message.into(),
        }
    }
}

impl From<&FetchError> for CrawlWarning {
    fn from(error: &FetchError) -> Self {
        Self::new(error.url(), error.to_string())
    }
}

impl fmt::Display for CrawlWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error scraping page {}: {}", self.url, self.message)
    }
}

/// Everything one crawl produced
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    pub seed_url: String,

    /// Rows from every fetched page, in crawl order
    pub rows: Vec<ContentRow>,

    pub warnings: Vec<CrawlWarning>,

    /// Number of pages successfully fetched
    pub pages_fetched: u32,

    pub stop_reason: StopReason,

    pub started_at: DateTime<Utc>,

    pub elapsed: Duration,
}

impl CrawlOutcome {
    /// Returns true if no rows were produced
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// One-line summary for the end of a crawl
    pub fn summary_message(&self) -> String {
        if self.is_empty() {
            return NO_CONTENT_MESSAGE.to_string();
        }
        format!(
            "Scraping completed in {:.2} seconds. Found {} items.",
            self.elapsed.as_secs_f64(),
            self.rows.len()
        )
    }
}
