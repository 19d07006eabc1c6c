//! Output module for driftnet
//!
//! Two files are produced per run, both named with a random per-run suffix so
//! repeated runs never clobber each other:
//!
//! - `email_social_links_<suffix>`: one block per processed URL (the result
//!   sink, behind the `RecordSink` trait)
//! - `newly_found_urls_<suffix>`: one line per accepted frontier URL (the
//!   discovery log)

mod discovery;
mod text;
mod traits;

pub use discovery::DiscoveryLog;
pub use text::TextFileSink;
pub use traits::{CrawlRecord, OutputError, OutputResult, RecordSink};

use rand::distributions::Alphanumeric;
use rand::Rng;
use std::path::{Path, PathBuf};

/// Generates the random filename suffix for this run
pub fn run_file_suffix() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(10)
        .map(char::from)
        .collect()
}

/// Resolves the result-file and discovery-log paths for a run
///
/// Creates the storage directory if it does not exist.
pub fn run_output_paths(storage_dir: &Path, suffix: &str) -> OutputResult<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(storage_dir).map_err(|source| OutputError::CreateDir {
        path: storage_dir.display().to_string(),
        source,
    })?;

    let results = storage_dir.join(format!("email_social_links_{}", suffix));
    let discovered = storage_dir.join(format!("newly_found_urls_{}", suffix));
    Ok((results, discovered))
}
