//! Result writer errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::filters::FilterError;

/// Result type for writers
pub type WriteResult<T> = Result<T, WriteError>;

#[derive(Debug, Error)]
pub enum WriteError {
    /// Output could not be created or written
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The approach has no linked NEO to serialize
    #[error("Approach of '{designation}' has no linked NEO")]
    UnresolvedNeo { designation: String },

    /// The query feeding the writer failed
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Output path extension is neither `.csv` nor `.json`
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(PathBuf),
}
