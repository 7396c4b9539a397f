//! Transformer trait for data transformation

use eyre::Result;

/// Transformer trait for transforming data items
///
/// Implementors define how to transform items:
/// - Type coercion (text to numbers)
/// - Unit conversion
/// - Data cleaning
///
/// # Example
/// ```no_run
/// use people_etl::etl::Transformer;
/// use eyre::Result;
///
/// struct Uppercase;
///
/// impl Transformer for Uppercase {
///     type Input = String;
///     type Output = String;
///
///     fn transform(&self, input: Self::Input) -> Result<Self::Output> {
///         Ok(input.to_uppercase())
///     }
/// }
/// ```
pub trait Transformer {
    /// Input item type
    type Input;

    /// Output item type after transformation
    type Output;

    /// Transform a single item
    ///
    /// # Errors
    /// Returns an error if transformation fails
    fn transform(&self, input: Self::Input) -> Result<Self::Output>;

    /// Transform multiple items, preserving count and order
    ///
    /// Override this for optimized batch processing
    fn transform_many(&self, inputs: Vec<Self::Input>) -> Result<Vec<Self::Output>> {
        inputs.into_iter().map(|i| self.transform(i)).collect()
    }
}
