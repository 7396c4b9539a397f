//! Imperial to metric conversion
//!
//! Converts height from inches to meters and weight from pounds to
//! kilograms, rounding both to two decimals.

use crate::etl::Transformer;
use crate::model::{RawRecord, Record};
use eyre::Result;

/// Meters per inch
pub const INCHES_TO_METERS: f64 = 0.0254;

/// Kilograms per pound
pub const POUNDS_TO_KILOGRAMS: f64 = 0.45359237;

/// Transformer that turns raw text measurements into metric numbers
///
/// Values that are not numeric (including `NaN`) become `None` instead of
/// failing the row. Infinities pass through unchanged.
/// Rounding is half-to-even at the second decimal.
///
/// # Example
/// ```
/// use people_etl::etl::Transformer;
/// use people_etl::model::RawRecord;
/// use people_etl::transform::UnitConverter;
///
/// let record = UnitConverter::new()
///     .transform(RawRecord::new("Bob", "70", "150"))
///     .unwrap();
///
/// assert_eq!(record.height, Some(1.78));
/// assert_eq!(record.weight, Some(68.04));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct UnitConverter;

impl UnitConverter {
    pub fn new() -> Self {
        Self
    }
}

impl Transformer for UnitConverter {
    type Input = RawRecord;
    type Output = Record;

    fn transform(&self, input: Self::Input) -> Result<Self::Output> {
        Ok(Record {
            height: convert(&input.height, INCHES_TO_METERS),
            weight: convert(&input.weight, POUNDS_TO_KILOGRAMS),
            name: input.name,
        })
    }
}

fn convert(raw: &str, factor: f64) -> Option<f64> {
    parse_number(raw).map(|value| round_2(value * factor))
}

/// Parse a measurement, treating anything non-numeric as missing
///
/// `inf` and `-inf` are numbers and survive conversion; `NaN` is missing.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}

/// Round to two decimals, ties to even
pub fn round_2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
