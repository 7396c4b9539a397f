//! Transform implementations for people records
//!
//! This module provides the concrete transformers applied between
//! extraction and loading.

mod unit_converter;

pub use unit_converter::{
    INCHES_TO_METERS, POUNDS_TO_KILOGRAMS, UnitConverter, parse_number, round_2,
};
