//! Loader trait for loading data to destinations

use eyre::Result;

/// Loader trait for loading data to a destination
///
/// Loaders only read the items they are handed; the pipeline keeps
/// ownership so the loaded dataset can be returned to the caller.
///
/// # Example
/// ```no_run
/// use people_etl::etl::Loader;
/// use eyre::Result;
/// use std::path::PathBuf;
///
/// struct LineLoader {
///     path: PathBuf,
/// }
///
/// impl Loader for LineLoader {
///     type Item = String;
///
///     fn load(&self, items: &[Self::Item]) -> Result<usize> {
///         std::fs::write(&self.path, items.join("\n"))?;
///         Ok(items.len())
///     }
/// }
/// ```
pub trait Loader {
    /// The type of items to load
    type Item;

    /// Load items to the destination
    ///
    /// Returns the number of items written
    ///
    /// # Errors
    /// Returns an error if loading fails (I/O, serialization, etc.)
    fn load(&self, items: &[Self::Item]) -> Result<usize>;
}

impl<L: Loader + ?Sized> Loader for &L {
    type Item = L::Item;

    fn load(&self, items: &[Self::Item]) -> Result<usize> {
        (**self).load(items)
    }
}
