//! Crawler module for page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching (one attempt per page)
//! - HTML parsing and row extraction
//! - The pagination loop

mod coordinator;
mod fetcher;
mod outcome;
mod parser;

pub use coordinator::Crawler;
pub use fetcher::{build_http_client, FetchedPage, Fetcher};
pub use outcome::{CrawlOutcome, CrawlWarning, NO_CONTENT_MESSAGE};
pub use parser::{content_elements, extract_rows, parse_page, PageElement, ParsedPage};

use crate::config::Config;
use crate::ScrapeError;

/// Crawls from `seed_url` with the default configuration
///
/// Uses a `Mozilla/5.0` user agent, a 10 second request timeout and a
/// 1 second pause between pages.
///
/// # Returns
///
/// * `Ok(CrawlOutcome)` - The crawl ran; it may still carry warnings
/// * `Err(ScrapeError)` - The HTTP client could not be built
///
/// # Example
///
/// ```no_run
/// # async fn example() -> Result<(), page_trail::ScrapeError> {
/// let outcome = page_trail::crawl("https://example.com/", 3).await?;
/// for warning in &outcome.warnings {
///     eprintln!("{}", warning);
/// }
/// println!("{}", outcome.summary_message());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(seed_url: &str, max_pages: u32) -> Result<CrawlOutcome, ScrapeError> {
    crawl_with_config(&Config::default(), seed_url, max_pages).await
}

/// Crawls from `seed_url` with an explicit configuration
pub async fn crawl_with_config(
    config: &Config,
    seed_url: &str,
    max_pages: u32,
) -> Result<CrawlOutcome, ScrapeError> {
    let crawler = Crawler::new(config)?;
    Ok(crawler.crawl(seed_url, max_pages).await)
}
