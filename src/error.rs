//! Typed failures raised while reading sources
//!
//! These travel inside [`eyre::Report`] like every other error in the crate,
//! so callers that care about the cause can `downcast_ref::<EtlError>()`.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EtlError {
    /// A source file could not be decoded in its format.
    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// An XML record lacks one of the `name`/`height`/`weight` children.
    #[error("Missing <{element}> element in record {record} of {}", .path.display())]
    MissingElement {
        path: PathBuf,
        record: usize,
        element: &'static str,
    },

    /// The directory to scan for sources does not exist.
    #[error("Source directory not found: {}", .path.display())]
    SourceDirectory { path: PathBuf },
}

impl EtlError {
    pub fn parse(path: impl AsRef<Path>, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }
}
