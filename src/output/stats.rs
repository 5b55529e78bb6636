//! Statistics over a finished crawl
//!
//! This module summarizes a crawl outcome by tag and by page, for display
//! after the report has been produced.

use crate::crawler::CrawlOutcome;
use crate::state::{ContentTag, StopReason};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Report statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportStatistics {
    /// Total number of rows
    pub total_rows: usize,

    /// Number of pages fetched
    pub pages_fetched: u32,

    /// Count of rows by tag
    pub rows_by_tag: BTreeMap<ContentTag, usize>,

    /// Count of rows by source page, in first-seen order
    pub rows_by_page: Vec<(String, usize)>,

    /// Number of anchor rows that carry a link
    pub linked_rows: usize,

    /// Number of warnings raised
    pub warnings: usize,

    /// When the crawl started
    pub started_at: Option<DateTime<Utc>>,

    /// Why the crawl stopped
    pub stop_reason: Option<StopReason>,
}

impl ReportStatistics {
    /// Computes statistics for a crawl outcome
    pub fn from_outcome(outcome: &CrawlOutcome) -> Self {
        let mut stats = Self {
            total_rows: outcome.rows.len(),
            pages_fetched: outcome.pages_fetched,
            warnings: outcome.warnings.len(),
            started_at: Some(outcome.started_at),
            stop_reason: Some(outcome.stop_reason),
            ..Self::default()
        };

        for row in &outcome.rows {
            *stats.rows_by_tag.entry(row.tag).or_insert(0) += 1;

            if row.has_link() {
                stats.linked_rows += 1;
            }

            let same_page = stats
                .rows_by_page
                .last()
                .map_or(false, |(url, _)| *url == row.source_url);
            if same_page {
                if let Some((_, count)) = stats.rows_by_page.last_mut() {
                    *count += 1;
                }
            } else {
                stats.rows_by_page.push((row.source_url.clone(), 1));
            }
        }

        stats
    }

    /// Returns the number of rows with the given tag
    pub fn count(&self, tag: ContentTag) -> usize {
        self.rows_by_tag.get(&tag).copied().unwrap_or(0)
    }

    /// Returns true if the crawl ended on a failure
    pub fn stopped_early(&self) -> bool {
        self.stop_reason.map_or(false, |reason| reason.is_error())
    }
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &ReportStatistics) {
    println!("=== Report Statistics ===\n");

    println!("Overview:");
    if let Some(started_at) = stats.started_at {
        println!("  Started at: {}", started_at.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    if let Some(reason) = stats.stop_reason {
        let note = if stats.stopped_early() { " (stopped early)" } else { "" };
        println!("  Stopped: {}{}", reason, note);
    }
    println!("  Pages fetched: {}", stats.pages_fetched);
    println!("  Total rows: {}", stats.total_rows);
    println!("  Rows with links: {}", stats.linked_rows);
    println!("  Warnings: {}", stats.warnings);
    println!();

    println!("Rows by Tag:");
    for tag in ContentTag::ALL {
        let count = stats.count(tag);
        let percentage = if stats.total_rows > 0 {
            (count as f64 / stats.total_rows as f64) * 100.0
        } else {
            0.0
        };
        println!("  {}: {} ({:.1}%)", tag, count, percentage);
    }
    println!();

    if !stats.rows_by_page.is_empty() {
        println!("Rows by Page:");
        for (url, count) in &stats.rows_by_page {
            println!("  {}: {}", url, count);
        }
    }
}
