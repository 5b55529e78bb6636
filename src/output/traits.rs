//! Report writer trait and error types
//!
//! This module defines the interface shared by the report formats.

use crate::state::ContentRow;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write report to {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Column names of every report, in order
pub const REPORT_COLUMNS: [&str; 4] = ["URL", "Tag", "Content", "Link"];

/// Trait for report formats
///
/// A format only has to know how to render rows; writing to a file or any
/// other sink is shared.
pub trait ReportWriter {
    /// File extension used when no explicit path is given
    fn extension(&self) -> &'static str;

    /// Renders the rows as a complete document, header included
    fn render(&self, rows: &[ContentRow]) -> String;

    /// Writes the rendered report to any writer
    fn write_to(&self, rows: &[ContentRow], out: &mut dyn Write) -> OutputResult<()> {
        out.write_all(self.render(rows).as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Writes the rendered report to a file, replacing it if it exists
    fn write_report(&self, rows: &[ContentRow], path: &Path) -> OutputResult<()> {
        let to_error = |source| OutputError::Write {
            path: path.display().to_string(),
            source,
        };

        let mut file = File::create(path).map_err(to_error)?;
        file.write_all(self.render(rows).as_bytes()).map_err(to_error)?;

        Ok(())
    }
}
