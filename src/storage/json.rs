//! JSON file operations

use crate::error::EtlError;
use crate::etl::Extractor;
use crate::model::RawRecord;

use eyre::{Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Read people records from a JSON document
///
/// The document is either a single object or an array of objects. Strings are
/// taken verbatim and other scalars by their JSON text; `null` and absent
/// fields read as empty text.
pub struct JsonReader {
    path: PathBuf,
}

impl JsonReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn read(&self) -> Result<Vec<RawRecord>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read JSON file: {}", self.path.display()))?;

        let document: Value =
            serde_json::from_str(&content).map_err(|e| EtlError::parse(&self.path, e))?;

        match document {
            Value::Object(object) => Ok(vec![to_record(&object)]),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    item.as_object().map(to_record).ok_or_else(|| {
                        EtlError::parse(&self.path, format!("item {} is not an object", index))
                            .into()
                    })
                })
                .collect(),
            _ => Err(EtlError::parse(
                &self.path,
                "expected an object or an array of objects",
            )
            .into()),
        }
    }
}

fn to_record(object: &Map<String, Value>) -> RawRecord {
    RawRecord {
        name: field_text(object.get("name")),
        height: field_text(object.get("height")),
        weight: field_text(object.get("weight")),
    }
}

fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

impl Extractor for JsonReader {
    type Item = RawRecord;

    fn extract(&self) -> Result<Vec<Self::Item>> {
        self.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn read_str(content: &str) -> Result<Vec<RawRecord>> {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("people.json");
        std::fs::write(&path, content).unwrap();
        JsonReader::new(&path).read()
    }

    #[test]
    fn test_read_array() {
        let rows = read_str(r#"[{"name":"Bob","height":70,"weight":160},{"name":"Eve","height":"62.5","weight":"110"}]"#)
            .unwrap();

        assert_eq!(
            rows,
            vec![
                RawRecord::new("Bob", "70", "160"),
                RawRecord::new("Eve", "62.5", "110"),
            ]
        );
    }

    #[test]
    fn test_read_single_object() {
        let rows = read_str(r#"{"name":"Bob","height":70.5,"weight":160}"#).unwrap();
        assert_eq!(rows, vec![RawRecord::new("Bob", "70.5", "160")]);
    }

    #[test]
    fn test_read_null_and_missing_fields() {
        let rows = read_str(r#"[{"name":"Bob","height":null,"extra":1}]"#).unwrap();
        assert_eq!(rows, vec![RawRecord::new("Bob", "", "")]);
    }

    #[test]
    fn test_read_empty_array() {
        assert!(read_str("[]").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = read_str(r#"[{"name":"Bob","#).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EtlError>(),
            Some(EtlError::Parse { .. })
        ));
    }

    #[test]
    fn test_non_object_items_are_rejected() {
        let err = read_str(r#"[{"name":"Bob"}, 3]"#).unwrap_err();
        assert!(err.to_string().contains("item 1 is not an object"));

        assert!(read_str(r#""just a string""#).is_err());
    }
}
