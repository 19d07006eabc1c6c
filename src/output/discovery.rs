//! Append-only discovery log
//!
//! One line per newly accepted frontier URL, written and flushed at the
//! moment of discovery rather than batched, so the log is complete up to the
//! instant the process stops.

use crate::output::traits::OutputResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct DiscoveryLog {
    writer: BufWriter<File>,
}

impl DiscoveryLog {
    /// Creates (truncating) the discovery log file
    pub fn create(path: &Path) -> OutputResult<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Appends one URL, synchronously
    pub fn append(&mut self, url: &str) -> OutputResult<()> {
        writeln!(self.writer, "{}", url)?;
        self.writer.flush()?;
        Ok(())
    }
}
