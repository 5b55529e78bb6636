//! Crawler coordinator - the pagination loop
//!
//! Starting from a seed URL the loop fetches one page at a time, extracts its
//! rows, looks for a "next" anchor and keeps going until one of:
//! - the page has no "next" anchor
//! - the page limit is reached
//! - a fetch fails (the rows collected so far are kept)

use crate::config::Config;
use crate::crawler::fetcher::Fetcher;
use crate::crawler::outcome::{CrawlOutcome, CrawlWarning};
use crate::crawler::parser::parse_page;
use crate::state::{CrawlState, StopReason};
use crate::url::resolve_against_seed;
use crate::ScrapeError;
use chrono::Utc;
use std::time::{Duration, Instant};

/// Main crawler structure
#[derive(Debug, Clone)]
pub struct Crawler {
    fetcher: Fetcher,
    page_delay: Duration,
}

impl Crawler {
    /// Creates a crawler from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Successfully created crawler
    /// * `Err(ScrapeError)` - The HTTP client could not be built
    pub fn new(config: &Config) -> Result<Self, ScrapeError> {
        let fetcher = Fetcher::new(&config.fetcher)?;
        Ok(Self::with_fetcher(fetcher, config.scraper.page_delay()))
    }

    pub fn with_fetcher(fetcher: Fetcher, page_delay: Duration) -> Self {
        Self {
            fetcher,
            page_delay,
        }
    }

    /// Runs the pagination loop
    ///
    /// Pages are fetched strictly one after another. Between two fetches the
    /// loop waits for the configured page delay. A "next" link is always
    /// resolved against `seed_url`, while anchor rows are resolved against
    /// the page they were found on.
    ///
    /// This never fails: fetch errors end the loop and are reported in
    /// [`CrawlOutcome::warnings`].
    pub async fn crawl(&self, seed_url: &str, max_pages: u32) -> CrawlOutcome {
        let started_at = Utc::now();
        let start_time = Instant::now();

        let mut state = CrawlState::new(seed_url);
        let mut warnings = Vec::new();

        tracing::info!("Starting crawl at {} (max {} pages)", seed_url, max_pages);

        let stop_reason = loop {
            let current_url = match state.next_target(max_pages) {
                Ok(url) => url.to_string(),
                Err(reason) => break reason,
            };

            let page = match self.fetcher.fetch(&current_url).await {
                Ok(page) => page,
                Err(e) => {
                    let warning = CrawlWarning::from(&e);
                    tracing::warn!("{}", warning);
                    warnings.push(warning);
                    break StopReason::FetchFailed;
                }
            };

            let parsed = parse_page(&page.body, &page.url);
            tracing::info!(
                "Scraped {} (HTTP {}): {} rows",
                current_url,
                page.status_code,
                parsed.rows.len()
            );
            state.record_page(parsed.rows);

            let Some(href) = parsed.next_href else {
                tracing::debug!("No next link on {}", current_url);
                break StopReason::NoNextLink;
            };

            // The link is only resolved when another fetch will follow
            state.count_next_link();
            if state.limit_reached(max_pages) {
                tracing::debug!("Next link {:?} on {} not followed", href, current_url);
                break StopReason::PageLimitReached;
            }

            let next_url = match resolve_against_seed(&href, seed_url) {
                Ok(url) => url,
                Err(e) => {
                    let warning = CrawlWarning::new(href, e.to_string());
                    tracing::warn!("{}", warning);
                    warnings.push(warning);
                    break StopReason::InvalidNextLink;
                }
            };

            tracing::debug!("Next link {:?} on {} -> {}", href, current_url, next_url);
            state.advance(next_url.to_string());

            if !self.page_delay.is_zero() {
                tokio::time::sleep(self.page_delay).await;
            }
        };

        let pages_fetched = state.pages_fetched();
        let rows = state.into_results();
        let elapsed = start_time.elapsed();

        tracing::info!(
            "Crawl finished ({}): {} pages, {} rows in {:?}",
            stop_reason,
            pages_fetched,
            rows.len(),
            elapsed
        );

        CrawlOutcome {
            seed_url: seed_url.to_string(),
            rows,
            warnings,
            pages_fetched,
            stop_reason,
            started_at,
            elapsed,
        }
    }
}
