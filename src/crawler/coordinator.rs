//! Crawl driver - main loop orchestration
//!
//! This module owns the run's state and drives it to completion:
//! - Seeding the frontier and dedup store from the seed file
//! - Popping one URL at a time and fetching it
//! - Feeding successful fetches through link and email extraction
//! - Appending accepted discoveries to the discovery log and the frontier
//! - Emitting one crawl record per processed page
//!
//! The loop terminates only when the frontier is exhausted. Fetch-level
//! failures drop the URL and keep going; file I/O failures are fatal.

use crate::config::Config;
use crate::crawler::emails::extract_emails;
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchOutcome};
use crate::crawler::parser::extract_links;
use crate::output::{
    run_file_suffix, run_output_paths, CrawlRecord, DiscoveryLog, RecordSink, TextFileSink,
};
use crate::seeds::read_seed_file;
use crate::state::{DedupStore, Frontier};
use crate::url::page_domain;
use crate::Result;
use reqwest::Client;
use std::path::Path;
use url::Url;

/// Main crawl driver
///
/// Owns the HTTP client, the dedup store, the frontier, and both output
/// files for the duration of one run.
pub struct Coordinator {
    client: Client,
    store: DedupStore,
    frontier: Frontier,
    discovery_log: DiscoveryLog,
    sink: Box<dyn RecordSink>,
    progress_interval: u64,
}

impl Coordinator {
    /// Builds a coordinator: HTTP client, seeded frontier, output files
    pub fn new(config: &Config, seed_path: &Path) -> Result<Self> {
        let client = build_http_client(&config.fetch)?;

        let mut store = DedupStore::new();
        let mut frontier = Frontier::new();
        read_seed_file(seed_path, &mut store, &mut frontier)?;

        let suffix = run_file_suffix();
        let (results_path, discovered_path) =
            run_output_paths(Path::new(&config.output.storage_dir), &suffix)?;
        tracing::info!(
            "Writing results to {} and discoveries to {}",
            results_path.display(),
            discovered_path.display()
        );

        let sink = TextFileSink::create(&results_path)?;
        let discovery_log = DiscoveryLog::create(&discovered_path)?;

        Ok(Self {
            client,
            store,
            frontier,
            discovery_log,
            sink: Box::new(sink),
            progress_interval: config.output.progress_interval,
        })
    }

    /// Runs the crawl loop until the frontier is exhausted
    pub async fn run(&mut self) -> Result<()> {
        let start_time = std::time::Instant::now();
        let mut pages_processed: u64 = 0;

        while let Some(url) = self.frontier.pop() {
            self.process_url(&url).await?;
            pages_processed += 1;

            if pages_processed % self.progress_interval == 0 {
                tracing::info!(
                    "Progress: {} pages processed, {} queued, {} emails, {} social links",
                    pages_processed,
                    self.frontier.len(),
                    self.store.email_count(),
                    self.store.social_link_count()
                );
            }
        }

        tracing::info!(
            "Crawl complete: {} pages in {:?}; {} emails, {} social links, {} links seen",
            pages_processed,
            start_time.elapsed(),
            self.store.email_count(),
            self.store.social_link_count(),
            self.store.link_count()
        );

        Ok(())
    }

    /// Processes a single URL: fetch, extract, record
    ///
    /// Fetch failures and rejected responses are logged and dropped; the
    /// returned errors are file-write failures only.
    async fn process_url(&mut self, url: &str) -> Result<()> {
        tracing::debug!("Fetching {}", url);

        match fetch_url(&self.client, url).await {
            FetchOutcome::Html { status: _, body } => {
                let original_domain = Url::parse(url).ok().and_then(|u| page_domain(&u));

                // Two independent passes over the body: anchors for links,
                // raw text for emails
                let harvest = extract_links(&body, original_domain.as_deref(), &mut self.store);

                for link in &harvest.frontier_links {
                    self.discovery_log.append(link)?;
                    self.frontier.push(link.clone());
                    tracing::debug!("Discovered {}", link);
                }

                let new_emails = extract_emails(&body, self.store.seen_emails());
                for email in &new_emails {
                    self.store.add_email(email);
                }

                let record = CrawlRecord::new(
                    url.to_string(),
                    new_emails.into_iter().collect(),
                    harvest.social_links,
                );
                self.sink.record(&record)?;
            }

            FetchOutcome::Rejected {
                status,
                content_type,
            } => {
                tracing::warn!(
                    "Rejected {}: status {}, content-type {}",
                    url,
                    status,
                    content_type
                );
            }

            FetchOutcome::Failed { error } => {
                tracing::warn!("Fetch failed for {}: {}", url, error);
            }
        }

        Ok(())
    }
}

/// Runs a complete crawl: seed, drain the frontier, write both output files
pub async fn run_crawl(seed_path: &Path, config: &Config) -> Result<()> {
    let mut coordinator = Coordinator::new(config, seed_path)?;
    coordinator.run().await
}
