//! The people ETL job: source directory → metric conversion → CSV

use crate::config::JobConfig;
use crate::etl::Pipeline;
use crate::model::Record;
use crate::storage::{CsvWriter, ProgressLog, SourceDirectory};
use crate::transform::UnitConverter;
use eyre::Result;

/// Runs the full pipeline for one [`JobConfig`]
///
/// # Example
/// ```no_run
/// use people_etl::{EtlJob, JobConfig};
///
/// # fn example() -> eyre::Result<()> {
/// let records = EtlJob::new(JobConfig::default()).run()?;
/// println!("Converted {} people", records.len());
/// # Ok(())
/// # }
/// ```
pub struct EtlJob {
    config: JobConfig,
}

impl EtlJob {
    pub fn new(config: JobConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &JobConfig {
        &self.config
    }

    /// Extract, convert and write every source record
    ///
    /// Returns the records written to the target file.
    pub fn run(&self) -> Result<Vec<Record>> {
        let pipeline = Pipeline::new(
            SourceDirectory::new(&self.config.source_dir),
            UnitConverter::new(),
            CsvWriter::new(&self.config.target_file),
            ProgressLog::new(&self.config.log_file),
        );
        pipeline.run()
    }
}
