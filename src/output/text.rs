//! Text-file result sink
//!
//! Writes `email_social_links_<suffix>` in the storage directory: a timestamp
//! header, then one block per processed URL listing the emails and social
//! links first seen on that page. Flushed per record so a killed run keeps
//! everything written so far.

use crate::output::traits::{CrawlRecord, OutputResult, RecordSink};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct TextFileSink {
    writer: BufWriter<File>,
}

impl TextFileSink {
    /// Creates the result file and writes the timestamp header
    pub fn create(path: &Path) -> OutputResult<Self> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "TIME: {}", chrono::Local::now())?;
        writer.flush()?;
        Ok(Self { writer })
    }
}

impl RecordSink for TextFileSink {
    fn record(&mut self, record: &CrawlRecord) -> OutputResult<()> {
        writeln!(self.writer, "url: {}", record.url)?;
        if !record.emails.is_empty() {
            writeln!(self.writer, "emails: {}", record.emails.join(", "))?;
        }
        if !record.social_links.is_empty() {
            writeln!(self.writer, "social_media: {}", record.social_links.join(", "))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
