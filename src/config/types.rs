use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// User agent sent with every request unless configured otherwise
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Per-request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Pause between consecutive page fetches in milliseconds
pub const DEFAULT_PAGE_DELAY_MS: u64 = 1_000;

/// Number of pages fetched when nothing else is requested
pub const DEFAULT_MAX_PAGES: u32 = 1;

/// Upper bound accepted for the page limit
pub const MAX_PAGES_LIMIT: u32 = 100;

/// Report file written when no path is given
pub const DEFAULT_REPORT_PATH: &str = "web_scrape_report.csv";

/// Main configuration structure for Page-Trail
///
/// Every section is optional in the TOML file; missing sections and keys
/// fall back to their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scraper: ScraperConfig,
    pub fetcher: FetcherConfig,
    pub output: OutputConfig,
}

/// Pagination behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Maximum number of pages to follow from the seed
    #[serde(rename = "max-pages")]
    pub max_pages: u32,

    /// Pause between page fetches (milliseconds)
    #[serde(rename = "page-delay-ms")]
    pub page_delay_ms: u64,
}

impl ScraperConfig {
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            page_delay_ms: DEFAULT_PAGE_DELAY_MS,
        }
    }
}

/// HTTP request configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Value of the User-Agent header
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Timeout for a single request (milliseconds)
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl FetcherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the report file
    #[serde(rename = "report-path")]
    pub report_path: String,

    /// Report format
    pub format: ReportFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: DEFAULT_REPORT_PATH.to_string(),
            format: ReportFormat::default(),
        }
    }
}

/// Supported report formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Comma-separated values with a header row
    #[default]
    Csv,
    /// Markdown table
    Markdown,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}
