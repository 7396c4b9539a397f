//! Extractor trait for data extraction from various sources

use eyre::Result;

/// Extractor trait for extracting data from a source
///
/// Implementors define how to extract items from sources like:
/// - A single CSV, JSON or XML file
/// - A directory holding many such files
///
/// # Example
/// ```no_run
/// use people_etl::etl::Extractor;
/// use eyre::Result;
/// use std::path::PathBuf;
///
/// struct LineExtractor {
///     path: PathBuf,
/// }
///
/// impl Extractor for LineExtractor {
///     type Item = String;
///
///     fn extract(&self) -> Result<Vec<Self::Item>> {
///         let content = std::fs::read_to_string(&self.path)?;
///         Ok(content.lines().map(String::from).collect())
///     }
/// }
/// ```
pub trait Extractor {
    /// The type of items extracted
    type Item;

    /// Extract items from the source, in source order
    ///
    /// # Errors
    /// Returns an error if extraction fails (I/O, parsing, etc.)
    fn extract(&self) -> Result<Vec<Self::Item>>;
}

impl<E: Extractor + ?Sized> Extractor for &E {
    type Item = E::Item;

    fn extract(&self) -> Result<Vec<Self::Item>> {
        (**self).extract()
    }
}
