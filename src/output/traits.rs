//! Output sink trait and record types
//!
//! The driver talks to its result sink through the `RecordSink` trait so the
//! text-file format stays swappable and tests can capture records in memory.

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Per-URL output: the page plus everything newly found on it
///
/// Produced once per successfully processed URL and never mutated after
/// creation. The email and social-link lists are sorted for stable output.
#[derive(Debug, Clone)]
pub struct CrawlRecord {
    /// The processed URL
    pub url: String,

    /// Emails first seen on this page
    pub emails: Vec<String>,

    /// Social-media links first seen on this page
    pub social_links: Vec<String>,
}

impl CrawlRecord {
    pub fn new(url: String, mut emails: Vec<String>, mut social_links: Vec<String>) -> Self {
        emails.sort();
        social_links.sort();
        Self {
            url,
            emails,
            social_links,
        }
    }
}

/// Sink receiving one `CrawlRecord` per processed URL
pub trait RecordSink {
    fn record(&mut self, record: &CrawlRecord) -> OutputResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_sorts_findings() {
        let record = CrawlRecord::new(
            "https://example.org/about".to_string(),
            vec!["z@example.org".to_string(), "a@example.org".to_string()],
            vec![],
        );
        assert_eq!(record.emails, vec!["a@example.org", "z@example.org"]);
    }
}
