//! Output module for generating crawl reports
//!
//! This module handles:
//! - Rendering rows as CSV (the exchange format for spreadsheet tools)
//! - Rendering rows as a markdown table
//! - Summarizing a crawl as statistics
//!
//! Every format uses the columns `URL, Tag, Content, Link`, in that order.

mod csv;
mod markdown;
pub mod stats;
mod traits;

pub use self::csv::{format_csv_report, CsvReport};
pub use markdown::{format_markdown_table, MarkdownReport};
pub use stats::{print_statistics, ReportStatistics};
pub use traits::{OutputError, OutputResult, ReportWriter, REPORT_COLUMNS};

use crate::config::ReportFormat;

/// Returns the writer for a report format
pub fn writer_for(format: ReportFormat) -> Box<dyn ReportWriter> {
    match format {
        ReportFormat::Csv => Box::new(CsvReport),
        ReportFormat::Markdown => Box::new(MarkdownReport),
    }
}
