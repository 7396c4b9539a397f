//! CSV file operations

use crate::error::EtlError;
use crate::etl::{Extractor, Loader};
use crate::model::{COLUMNS, RawRecord, Record, format_measure};

use eyre::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Read people records from a CSV file with a header row
///
/// Columns are matched by header name, so extra columns and any column order
/// are accepted. A column missing from the header reads as empty text.
pub struct CsvReader {
    path: PathBuf,
}

impl CsvReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read all data rows
    pub fn read(&self) -> Result<Vec<RawRecord>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to read CSV file: {}", self.path.display()))?;
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| EtlError::parse(&self.path, e))?;
        if headers.is_empty() {
            return Err(EtlError::parse(&self.path, "no header row").into());
        }

        reader
            .deserialize::<RawRecord>()
            .map(|row| row.map_err(|e| EtlError::parse(&self.path, e).into()))
            .collect()
    }
}

impl Extractor for CsvReader {
    type Item = RawRecord;

    fn extract(&self) -> Result<Vec<Self::Item>> {
        self.read()
    }
}

/// Write converted records to a CSV file with a leading row index
///
/// The header is `,name,height,weight` and indices count from 0. Every
/// write replaces the whole file.
pub struct CsvWriter {
    path: PathBuf,
}

impl CsvWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn write(&self, records: &[Record]) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_path(&self.path)
            .with_context(|| format!("Failed to write CSV file: {}", self.path.display()))?;

        writer.write_record(std::iter::once("").chain(COLUMNS))?;

        for (index, record) in records.iter().enumerate() {
            let index = index.to_string();
            let height = format_measure(record.height);
            let weight = format_measure(record.weight);
            writer.write_record([
                index.as_str(),
                record.name.as_str(),
                height.as_str(),
                weight.as_str(),
            ])?;
        }

        writer
            .flush()
            .with_context(|| format!("Failed to write CSV file: {}", self.path.display()))?;
        Ok(())
    }
}

impl Loader for CsvWriter {
    type Item = Record;

    fn load(&self, items: &[Self::Item]) -> Result<usize> {
        self.write(items)?;
        log::debug!("Wrote {} rows to {}", items.len(), self.path.display());
        Ok(items.len())
    }
}
