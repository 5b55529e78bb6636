//! Page-Trail: a paginated content scraper
//!
//! This crate fetches an HTML page, extracts its headings, paragraphs and links,
//! follows the page's "next" link up to a bounded number of pages and produces
//! a tabular report of everything it found.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Page-Trail operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Seed URL errors raised at the input boundary
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Please enter a valid URL.")]
    Empty,

    #[error("Failed to parse URL '{url}': {source}")]
    Parse {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),
}

/// A single page fetch that did not produce a response body
///
/// The `Display` output is the underlying message only; the URL is kept
/// separately so callers can phrase their own warning around it.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("request timed out after {timeout_ms}ms")]
    Timeout { url: String, timeout_ms: u64 },

    #[error("connection failed: {message}")]
    Connect { url: String, message: String },

    #[error("{message}")]
    Transport { url: String, message: String },
}

impl FetchError {
    /// The URL whose fetch failed
    pub fn url(&self) -> &str {
        match self {
            Self::InvalidUrl { url, .. }
            | Self::Timeout { url, .. }
            | Self::Connect { url, .. }
            | Self::Transport { url, .. } => url,
        }
    }

    /// Returns true if the request hit the fetch timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Result type alias for Page-Trail operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::crawler::{crawl, CrawlOutcome, CrawlWarning, Crawler};
pub use crate::state::{ContentRow, ContentTag, StopReason};
pub use crate::url::{resolve_link, validate_seed_url};
