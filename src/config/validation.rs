use crate::config::types::{
    Config, FetcherConfig, OutputConfig, ScraperConfig, MAX_PAGES_LIMIT,
};
use crate::{ConfigError, ConfigResult};

const MIN_TIMEOUT_MS: u64 = 100;
const MAX_TIMEOUT_MS: u64 = 120_000;
const MAX_PAGE_DELAY_MS: u64 = 60_000;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_scraper_config(&config.scraper)?;
    validate_fetcher_config(&config.fetcher)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates a page limit against the accepted 1..=100 range
pub fn validate_max_pages(max_pages: u32) -> ConfigResult<()> {
    if !(1..=MAX_PAGES_LIMIT).contains(&max_pages) {
        return Err(ConfigError::Validation(format!(
            "max_pages must be between 1 and {}, got {}",
            MAX_PAGES_LIMIT, max_pages
        )));
    }
    Ok(())
}

fn validate_scraper_config(config: &ScraperConfig) -> ConfigResult<()> {
    validate_max_pages(config.max_pages)?;

    if config.page_delay_ms > MAX_PAGE_DELAY_MS {
        return Err(ConfigError::Validation(format!(
            "page_delay_ms must be <= {}ms, got {}ms",
            MAX_PAGE_DELAY_MS, config.page_delay_ms
        )));
    }

    Ok(())
}

fn validate_fetcher_config(config: &FetcherConfig) -> ConfigResult<()> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if !(MIN_TIMEOUT_MS..=MAX_TIMEOUT_MS).contains(&config.timeout_ms) {
        return Err(ConfigError::Validation(format!(
            "timeout_ms must be between {} and {}, got {}",
            MIN_TIMEOUT_MS, MAX_TIMEOUT_MS, config.timeout_ms
        )));
    }

    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> ConfigResult<()> {
    if config.report_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "report_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
