//! Directory of mixed-format source files

use super::{CsvReader, JsonReader, XmlReader};
use crate::error::EtlError;
use crate::etl::Extractor;
use crate::model::RawRecord;

use eyre::{Context, Result};
use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};

/// File formats a source directory may hold, in extraction order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Json,
    Xml,
}

impl SourceFormat {
    pub const ALL: [SourceFormat; 3] = [SourceFormat::Csv, SourceFormat::Json, SourceFormat::Xml];

    pub fn extension(self) -> &'static str {
        match self {
            SourceFormat::Csv => "csv",
            SourceFormat::Json => "json",
            SourceFormat::Xml => "xml",
        }
    }

    /// Read one file of this format
    pub fn read(self, path: &Path) -> Result<Vec<RawRecord>> {
        match self {
            SourceFormat::Csv => CsvReader::new(path).read(),
            SourceFormat::Json => JsonReader::new(path).read(),
            SourceFormat::Xml => XmlReader::new(path).read(),
        }
    }
}

/// Read every `*.csv`, `*.json` and `*.xml` file in a directory
///
/// All CSV rows come first, then JSON, then XML. Within a format, files are
/// read in the alphabetical order the glob matcher yields. Hidden files and
/// subdirectories are not scanned. The first file that fails aborts the read.
pub struct SourceDirectory {
    path: PathBuf,
}

impl SourceDirectory {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// List the files of one format
    pub fn files(&self, format: SourceFormat) -> Result<Vec<PathBuf>> {
        if !self.path.is_dir() {
            return Err(EtlError::SourceDirectory {
                path: self.path.clone(),
            }
            .into());
        }

        let pattern = format!(
            "{}/*.{}",
            Pattern::escape(&self.path.to_string_lossy()),
            format.extension()
        );
        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };

        let mut files = Vec::new();
        for entry in glob::glob_with(&pattern, options)? {
            let path = entry.with_context(|| {
                format!("Failed to scan source directory: {}", self.path.display())
            })?;
            if path.is_file() {
                files.push(path);
            }
        }
        Ok(files)
    }

    /// Read all source files into one ordered list of records
    pub fn read_all(&self) -> Result<Vec<RawRecord>> {
        let mut records = Vec::new();

        for format in SourceFormat::ALL {
            for path in self.files(format)? {
                let rows = format.read(&path)?;
                log::debug!("Read {} rows from {}", rows.len(), path.display());
                records.extend(rows);
            }
        }

        Ok(records)
    }
}

impl Extractor for SourceDirectory {
    type Item = RawRecord;

    fn extract(&self) -> Result<Vec<Self::Item>> {
        self.read_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_read_all_orders_by_format() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        write(
            dir,
            "a.xml",
            "<root><person><name>Xena</name><height>60</height><weight>100</weight></person></root>",
        );
        write(dir, "b.json", r#"[{"name":"Jay","height":61,"weight":101}]"#);
        write(dir, "c.csv", "name,height,weight\nCid,62,102\n");
        write(dir, "a.csv", "name,height,weight\nAbe,63,103\nAda,64,104\n");
        write(dir, "notes.txt", "ignored");

        let rows = SourceDirectory::new(dir).read_all().unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, vec!["Abe", "Ada", "Cid", "Jay", "Xena"]);
    }

    #[test]
    fn test_same_rows_in_every_format() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        write(dir, "p.csv", "name,height,weight\nAlice,65,120\n");
        write(dir, "p.json", r#"{"name":"Alice","height":65,"weight":120}"#);
        write(
            dir,
            "p.xml",
            "<root><person><name>Alice</name><height>65</height><weight>120</weight></person></root>",
        );

        let rows = SourceDirectory::new(dir).read_all().unwrap();

        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| *r == RawRecord::new("Alice", "65", "120")));
    }

    #[test]
    fn test_empty_directory() {
        let temp = TempDir::new().unwrap();
        assert!(SourceDirectory::new(temp.path()).read_all().unwrap().is_empty());
    }

    #[test]
    fn test_skips_hidden_files_and_directories() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        write(dir, ".hidden.csv", "name,height,weight\nGhost,1,1\n");
        std::fs::create_dir(dir.join("nested.csv")).unwrap();

        let directory = SourceDirectory::new(dir);
        assert!(directory.files(SourceFormat::Csv).unwrap().is_empty());
        assert!(directory.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_directory_name_with_glob_characters() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("in[1]");
        std::fs::create_dir(&dir).unwrap();
        write(&dir, "p.csv", "name,height,weight\nAlice,65,120\n");

        let rows = SourceDirectory::new(&dir).read_all().unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let err = SourceDirectory::new(temp.path().join("Sources"))
            .read_all()
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<EtlError>(),
            Some(EtlError::SourceDirectory { .. })
        ));
    }

    #[test]
    fn test_one_bad_file_fails_everything() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        write(dir, "good.csv", "name,height,weight\nAlice,65,120\n");
        write(dir, "bad.json", "{not json");

        assert!(SourceDirectory::new(dir).read_all().is_err());
    }
}
