//! Markdown table generation
//!
//! This module renders report rows as a human-readable markdown table,
//! the terminal counterpart of a spreadsheet view.

use crate::output::traits::{ReportWriter, REPORT_COLUMNS};
use crate::state::ContentRow;

/// Markdown table report
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownReport;

impl ReportWriter for MarkdownReport {
    fn extension(&self) -> &'static str {
        "md"
    }

    fn render(&self, rows: &[ContentRow]) -> String {
        format_markdown_table(rows)
    }
}

/// Formats rows as a markdown table
///
/// # Arguments
///
/// * `rows` - The rows to render
///
/// # Returns
///
/// A formatted markdown string with one table row per content row
pub fn format_markdown_table(rows: &[ContentRow]) -> String {
    let mut md = String::new();

    md.push_str(&format!("| {} |\n", REPORT_COLUMNS.join(" | ")));
    md.push_str(&format!(
        "|{}\n",
        REPORT_COLUMNS
            .iter()
            .map(|c| format!("{}|", "-".repeat(c.len() + 2)))
            .collect::<String>()
    ));

    for row in rows {
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            escape_cell(&row.source_url),
            row.tag,
            escape_cell(&row.content),
            escape_cell(&row.link)
        ));
    }

    md
}

/// Keeps a value on one table line and prevents it from closing the cell
fn escape_cell(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}
