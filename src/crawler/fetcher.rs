//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with the configured user agent and timeouts
//! - One GET per URL with redirects followed
//! - Status and Content-Type gating
//! - Error classification
//!
//! A fetch is attempted exactly once; any failure drops the URL and the
//! crawl moves on.

use crate::config::FetchConfig;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchOutcome {
    /// Clean 2xx HTML response; extraction may proceed
    Html {
        /// HTTP status code
        status: u16,
        /// Page body content
        body: String,
    },

    /// Response arrived but is unusable (status >= 300 or not HTML)
    Rejected {
        /// The HTTP status code
        status: u16,
        /// Content-Type header value ("None" when the header is absent)
        content_type: String,
    },

    /// Transport failure (DNS, connect, timeout, body read)
    Failed {
        /// Error description
        error: String,
    },
}

/// Builds the HTTP client used for every fetch in a run
///
/// Redirect following is enabled (up to 10 hops); the connect and read
/// timeouts come from configuration.
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(&config.user_agent)
        .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
        .timeout(Duration::from_millis(config.read_timeout_ms))
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single URL
///
/// Issues one GET with redirects followed. Only a 2xx response whose
/// Content-Type contains `text/html` yields a body for extraction; anything
/// else is a `Rejected` or `Failed` outcome for the driver to log and drop.
pub async fn fetch_url(client: &Client, url: &str) -> FetchOutcome {
    let response = match client.get(url).send().await {
        Ok(r) => r,
        Err(e) => {
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                "Connection failed".to_string()
            } else {
                e.to_string()
            };
            return FetchOutcome::Failed { error };
        }
    };

    let status = response.status().as_u16();

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("None")
        .to_string();

    if status >= 300 || !content_type.to_lowercase().contains("text/html") {
        return FetchOutcome::Rejected {
            status,
            content_type,
        };
    }

    match response.text().await {
        Ok(body) => FetchOutcome::Html { status, body },
        Err(e) => FetchOutcome::Failed {
            error: e.to_string(),
        },
    }
}
