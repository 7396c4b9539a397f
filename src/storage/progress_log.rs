//! Append-only progress log file

use crate::etl::Progress;

use chrono::{Local, NaiveDateTime};
use eyre::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Timestamp layout of each log line, e.g. `2024-Mar-05-14:07:09`
pub const TIMESTAMP_FORMAT: &str = "%Y-%b-%d-%H:%M:%S";

/// Append `<timestamp>, <message>` lines to a text file
pub struct ProgressLog {
    path: PathBuf,
}

impl ProgressLog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a line stamped with the given local time
    pub fn record_at(&self, at: NaiveDateTime, message: &str) -> Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open log file: {}", self.path.display()))?;

        writeln!(file, "{}, {}", at.format(TIMESTAMP_FORMAT), message)
            .with_context(|| format!("Failed to write log file: {}", self.path.display()))?;

        Ok(())
    }
}

impl Progress for ProgressLog {
    fn record(&self, message: &str) -> Result<()> {
        log::info!("{}", message);
        self.record_at(Local::now().naive_local(), message)
    }
}
