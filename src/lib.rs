//! Driftnet: a contact-discovery web crawler
//!
//! This crate implements a small breadth-first crawler that drains a seeded
//! frontier of URLs, harvesting email addresses, social-media profile links,
//! and new same-site URLs worth visiting next.

pub mod config;
pub mod crawler;
pub mod output;
pub mod seeds;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for driftnet operations
///
/// Only unrecoverable conditions surface here: configuration problems and
/// file I/O failures. Per-URL fetch failures are modeled as
/// [`crawler::FetchOutcome`] variants and never abort the crawl.
#[derive(Debug, Error)]
pub enum DriftnetError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("Seed file error for {path}: {source}")]
    SeedFile {
        path: String,
        source: std::io::Error,
    },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

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

/// Result type alias for driftnet operations
pub type Result<T> = std::result::Result<T, DriftnetError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use output::CrawlRecord;
pub use state::{DedupStore, Frontier};
