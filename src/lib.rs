//! People ETL
//!
//! Normalizes people records from CSV, JSON and XML files into one metric
//! CSV dataset, logging each phase of the job to a progress file.

pub mod config;
pub mod error;
pub mod etl;
pub mod job;
pub mod model;
pub mod storage;
pub mod transform;

// Re-exports for convenience
pub use config::JobConfig;
pub use error::EtlError;
pub use etl::{Extractor, Loader, Pipeline, Progress, Transformer};
pub use job::EtlJob;
pub use model::{RawRecord, Record, Table};
pub use storage::{
    CsvReader, CsvWriter, JsonReader, ProgressLog, SourceDirectory, SourceFormat, XmlReader,
};
pub use transform::UnitConverter;
