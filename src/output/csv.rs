//! CSV report generation
//!
//! Output follows RFC 4180: a header row, comma separators, `\n` line
//! endings, and fields quoted only when they contain a comma, a quote or a
//! line break.

use crate::output::traits::{ReportWriter, REPORT_COLUMNS};
use crate::state::ContentRow;

/// Comma-separated report
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvReport;

impl ReportWriter for CsvReport {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn render(&self, rows: &[ContentRow]) -> String {
        format_csv_report(rows)
    }
}

/// Formats rows as CSV with a `URL,Tag,Content,Link` header
pub fn format_csv_report(rows: &[ContentRow]) -> String {
    let mut csv = String::new();
    push_record(&mut csv, &REPORT_COLUMNS);

    for row in rows {
        push_record(
            &mut csv,
            &[&row.source_url, row.tag.as_str(), &row.content, &row.link],
        );
    }

    csv
}

fn push_record(csv: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            csv.push(',');
        }
        push_field(csv, field);
    }
    csv.push('\n');
}

fn push_field(csv: &mut String, field: &str) {
    if field.contains([',', '"', '\n', '\r']) {
        csv.push('"');
        csv.push_str(&field.replace('"', "\"\""));
        csv.push('"');
    } else {
        csv.push_str(field);
    }
}
