//! Configuration module for Page-Trail
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! A configuration file is optional; [`Config::default`] mirrors the built-in
//! behavior (one page, 10 second timeout, 1 second pause between pages).
//!
//! # Example
//!
//! ```no_run
//! use page_trail::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("page-trail.toml")).unwrap();
//! println!("Scraper will follow up to {} pages", config.scraper.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, FetcherConfig, OutputConfig, ReportFormat, ScraperConfig, DEFAULT_MAX_PAGES,
    DEFAULT_PAGE_DELAY_MS, DEFAULT_REPORT_PATH, DEFAULT_TIMEOUT_MS, DEFAULT_USER_AGENT,
    MAX_PAGES_LIMIT,
};

// Re-export parser and validation functions
pub use parser::{load_config, parse_config};
pub use validation::{validate, validate_max_pages};
