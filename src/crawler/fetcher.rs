//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with the configured user agent and timeout
//! - Single-attempt GET requests
//! - Error classification
//!
//! The HTTP status code does not decide success. A 404 page with an HTML
//! body is returned like any other page; only transport-level failures
//! become a [`FetchError`].

use crate::config::FetcherConfig;
use crate::FetchError;
use reqwest::Client;
use std::error::Error as StdError;
use url::Url;

/// A fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// The URL as it was requested (not the post-redirect URL)
    pub url: String,

    /// HTTP status code
    pub status_code: u16,

    /// Raw response body
    pub body: String,
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetcher configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use page_trail::config::FetcherConfig;
/// use page_trail::crawler::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Issues one GET request per call
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    timeout_ms: u64,
}

impl Fetcher {
    /// Creates a fetcher from configuration
    pub fn new(config: &FetcherConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
            timeout_ms: config.timeout_ms,
        })
    }

    /// Fetches a URL, returning its body text
    ///
    /// There is no retry. Timeouts, connection failures, DNS failures and
    /// errors while reading the body are all reported as [`FetchError`].
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| self.classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("{} answered with HTTP {}", url, status.as_u16());
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.classify_error(url, e))?;

        Ok(FetchedPage {
            url: url.to_string(),
            status_code: status.as_u16(),
            body,
        })
    }

    fn classify_error(&self, url: &str, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                timeout_ms: self.timeout_ms,
            }
        } else if error.is_connect() {
            FetchError::Connect {
                url: url.to_string(),
                message: error_chain(&error),
            }
        } else {
            FetchError::Transport {
                url: url.to_string(),
                message: error_chain(&error),
            }
        }
    }
}

/// Joins an error and its sources into one line
fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
