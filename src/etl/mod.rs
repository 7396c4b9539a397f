//! Core ETL (Extract, Transform, Load) abstractions
//!
//! This module provides trait definitions for building data pipelines
//! that extract records from sources, transform them, and load them to
//! destinations, reporting each milestone to a [`Progress`] sink.

mod extract;
mod load;
mod pipeline;
mod progress;
mod transform;

pub use extract::Extractor;
pub use load::Loader;
pub use pipeline::{Pipeline, milestones};
pub use progress::Progress;
pub use transform::Transformer;
