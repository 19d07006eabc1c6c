//! Seed-file reader
//!
//! Consumed once at startup: a text file of newline-separated URLs, each fed
//! into the frontier and the seen-links set. Blank lines and duplicates are
//! skipped. A read failure is fatal to the run.

use crate::state::{DedupStore, Frontier};
use crate::{DriftnetError, Result};
use std::path::Path;

/// Reads the seed file, feeding the frontier and the seen-links set
///
/// Returns the number of URLs accepted. Seeds are enqueued as written;
/// validity is enforced for discovered links only, so a nonsense seed line
/// simply fails its fetch later and is dropped.
pub fn read_seed_file(
    path: &Path,
    store: &mut DedupStore,
    frontier: &mut Frontier,
) -> Result<usize> {
    let content = std::fs::read_to_string(path).map_err(|source| DriftnetError::SeedFile {
        path: path.display().to_string(),
        source,
    })?;

    let mut accepted = 0;
    for line in content.lines() {
        let url = line.trim();
        if url.is_empty() {
            continue;
        }

        if store.add_link(&url.to_lowercase()) {
            frontier.push(url.to_string());
            accepted += 1;
        }
    }

    tracing::info!("Seeded frontier with {} URLs from {}", accepted, path.display());
    Ok(accepted)
}
