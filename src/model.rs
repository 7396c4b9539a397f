//! Row types flowing through the pipeline
//!
//! Extraction yields [`RawRecord`]s holding text exactly as read from the
//! source files. The unit converter turns them into [`Record`]s whose
//! measurements are numbers, or `None` when the raw text was not numeric.

use serde::Deserialize;
use std::fmt;

/// Column schema shared by every source and by the output file
pub const COLUMNS: [&str; 3] = ["name", "height", "weight"];

/// One extracted row, before any conversion
///
/// Fields missing from a source are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub weight: String,
}

impl RawRecord {
    pub fn new(
        name: impl Into<String>,
        height: impl Into<String>,
        weight: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            height: height.into(),
            weight: weight.into(),
        }
    }
}

/// One converted row: height in meters, weight in kilograms
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub name: String,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

/// Render a measurement the way the output file stores it.
///
/// Whole numbers keep one decimal place (`1.0`), everything else uses the
/// shortest form that round-trips. Magnitudes from `1e16` up, or below `1e-4`,
/// switch to exponent form with a signed two-digit exponent (`1e+16`).
/// Infinities render as `inf`/`-inf`; missing values as an empty string.
pub fn format_measure(value: Option<f64>) -> String {
    match value {
        None => String::new(),
        Some(v) if v.is_infinite() => format!("{}", v),
        Some(v) if v != 0.0 && (v.abs() >= 1e16 || v.abs() < 1e-4) => exponent_form(v),
        Some(v) if v.fract() == 0.0 => format!("{:.1}", v),
        Some(v) => format!("{}", v),
    }
}

fn exponent_form(value: f64) -> String {
    let formatted = format!("{:e}", value);
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        Err(_) => formatted,
    }
}

/// Console preview of a dataset with a row index column
pub struct Table<'a>(pub &'a [Record]);

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<[String; 4]> = self
            .0
            .iter()
            .enumerate()
            .map(|(i, r)| {
                [
                    i.to_string(),
                    r.name.clone(),
                    measure_or_nan(r.height),
                    measure_or_nan(r.weight),
                ]
            })
            .collect();

        let header = [String::new(), COLUMNS[0].into(), COLUMNS[1].into(), COLUMNS[2].into()];
        let mut widths = header.clone().map(|h| h.chars().count());
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        write_row(f, &header, &widths)?;
        for row in &rows {
            writeln!(f)?;
            write_row(f, row, &widths)?;
        }
        Ok(())
    }
}

fn measure_or_nan(value: Option<f64>) -> String {
    match value {
        None => "NaN".to_string(),
        v => format_measure(v),
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String; 4], widths: &[usize; 4]) -> fmt::Result {
    write!(f, "{:<width$}", cells[0], width = widths[0])?;
    for (cell, width) in cells.iter().zip(widths).skip(1) {
        write!(f, "  {:>width$}", cell, width = *width)?;
    }
    Ok(())
}
