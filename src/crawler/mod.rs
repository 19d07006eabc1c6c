//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic:
//! - HTTP fetching with timeout and content-type gating
//! - HTML link harvesting and classification
//! - Email extraction from page text
//! - The frontier-draining drive loop

mod coordinator;
mod emails;
mod fetcher;
mod parser;

pub use coordinator::{run_crawl, Coordinator};
pub use emails::extract_emails;
pub use fetcher::{build_http_client, fetch_url, FetchOutcome};
pub use parser::{extract_links, LinkHarvest};

use crate::config::Config;
use crate::Result;
use std::path::Path;

/// Runs a complete crawl from a seed file
///
/// This is the single entry operation: it seeds the frontier from the given
/// file, drains it breadth-first, and writes the result file and discovery
/// log. Individual fetch failures never abort the run; file I/O failures do.
///
/// # Example
///
/// ```no_run
/// use driftnet::config::Config;
/// use driftnet::crawler::execute;
/// use std::path::Path;
///
/// # async fn example() -> driftnet::Result<()> {
/// execute(Path::new("seeds.txt"), &Config::default()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn execute(seed_path: &Path, config: &Config) -> Result<()> {
    run_crawl(seed_path, config).await
}
