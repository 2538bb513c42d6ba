//! Dataset loading errors
//!
//! Every load error is fatal at startup: the service does not serve a
//! partially loaded dataset.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for dataset loading
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors raised while reading the seed files
#[derive(Debug, Error)]
pub enum LoadError {
    /// Seed file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Seed file is not a JSON array of the expected entity
    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Entity id is zero or negative
    #[error("Invalid id {id} in {collection}: ids must be positive")]
    InvalidId { collection: &'static str, id: i32 },

    /// Two entities in one file share an id
    #[error("Duplicate id {id} in {collection}")]
    DuplicateId { collection: &'static str, id: i32 },
}

impl LoadError {
    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::Io { .. } => "DATASET_IO_ERROR",
            LoadError::Parse { .. } => "DATASET_PARSE_ERROR",
            LoadError::InvalidId { .. } => "DATASET_INVALID_ID",
            LoadError::DuplicateId { .. } => "DATASET_DUPLICATE_ID",
        }
    }
}
