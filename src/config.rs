//! Job configuration
//!
//! Paths default to the layout the job has always used: sources under
//! `./Sources`, output in `transformed_data.csv` and progress lines in
//! `log_file.txt`, all relative to the working directory.

use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_DIR: &str = "./Sources";
pub const DEFAULT_TARGET_FILE: &str = "transformed_data.csv";
pub const DEFAULT_LOG_FILE: &str = "log_file.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfig {
    /// Directory scanned for `*.csv`, `*.json` and `*.xml` files
    pub source_dir: PathBuf,
    /// CSV file the converted dataset is written to
    pub target_file: PathBuf,
    /// Append-only progress log
    pub log_file: PathBuf,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            target_file: PathBuf::from(DEFAULT_TARGET_FILE),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl JobConfig {
    /// Default layout rooted at `base` instead of the working directory
    pub fn in_dir(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            source_dir: base.join("Sources"),
            target_file: base.join(DEFAULT_TARGET_FILE),
            log_file: base.join(DEFAULT_LOG_FILE),
        }
    }

    pub fn with_source_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_dir = path.into();
        self
    }

    pub fn with_target_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.target_file = path.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }
}
