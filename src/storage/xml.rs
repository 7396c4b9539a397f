//! XML file operations

use crate::error::EtlError;
use crate::etl::Extractor;
use crate::model::RawRecord;

use encoding_rs::{Encoding, UTF_8};
use eyre::{Context, Result};
use roxmltree::{Document, Node, ParsingOptions};
use std::path::{Path, PathBuf};

/// Read people records from an XML document
///
/// Every element directly under the root is one `<person>` record, which must
/// carry `<name>`, `<height>` and `<weight>` children. An empty child reads as
/// empty text; a missing child is an [`EtlError::MissingElement`].
///
/// Text is decoded with the encoding named in the XML declaration, UTF-8 when
/// there is none. A DOCTYPE is accepted.
pub struct XmlReader {
    path: PathBuf,
}

impl XmlReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn read(&self) -> Result<Vec<RawRecord>> {
        let bytes = std::fs::read(&self.path)
            .with_context(|| format!("Failed to read XML file: {}", self.path.display()))?;
        let content = self.decode(&bytes)?;

        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let document = Document::parse_with_options(&content, options)
            .map_err(|e| EtlError::parse(&self.path, e))?;

        document
            .root_element()
            .children()
            .filter(|node| node.is_element())
            .enumerate()
            .map(|(index, person)| -> Result<RawRecord> {
                // 1-based so errors match what a reader counts in the file
                let record = index + 1;
                Ok(RawRecord {
                    name: self.child_text(person, record, "name")?,
                    height: self.child_text(person, record, "height")?,
                    weight: self.child_text(person, record, "weight")?,
                })
            })
            .collect()
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, EtlError> {
        let encoding = declared_encoding(bytes).unwrap_or(UTF_8);
        let (text, used, had_errors) = encoding.decode(bytes);
        if had_errors {
            return Err(EtlError::parse(
                &self.path,
                format!("invalid {} text", used.name()),
            ));
        }
        Ok(text.into_owned())
    }

    fn child_text(
        &self,
        person: Node<'_, '_>,
        record: usize,
        element: &'static str,
    ) -> Result<String, EtlError> {
        person
            .children()
            .find(|child| child.has_tag_name(element))
            .map(|child| child.text().unwrap_or_default().to_string())
            .ok_or_else(|| EtlError::MissingElement {
                path: self.path.clone(),
                record,
                element,
            })
    }
}

/// Encoding label from a leading `<?xml ... encoding="..."?>` declaration
fn declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(256)];
    let head = String::from_utf8_lossy(head);
    let declaration = head.trim_start_matches('\u{feff}').strip_prefix("<?xml")?;
    let declaration = &declaration[..declaration.find("?>")?];

    let rest = &declaration[declaration.find("encoding")? + "encoding".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let rest = &rest[1..];
    let label = &rest[..rest.find(quote)?];

    Encoding::for_label(label.as_bytes())
}

impl Extractor for XmlReader {
    type Item = RawRecord;

    fn extract(&self) -> Result<Vec<Self::Item>> {
        self.read()
    }
}
