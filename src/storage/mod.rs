//! File system storage operations
//!
//! This module handles all file I/O operations including:
//! - CSV, JSON and XML source readers
//! - Scanning a directory of mixed-format sources
//! - Writing the converted CSV dataset
//! - The append-only progress log

mod delimited;
mod directory;
mod json;
mod progress_log;
mod xml;

pub use delimited::{CsvReader, CsvWriter};
pub use directory::{SourceDirectory, SourceFormat};
pub use json::JsonReader;
pub use progress_log::{ProgressLog, TIMESTAMP_FORMAT};
pub use xml::XmlReader;
