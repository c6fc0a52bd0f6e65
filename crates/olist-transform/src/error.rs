//! Error types for feature extraction.

use thiserror::Error;

/// Errors raised while deriving time features.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Column not found in DataFrame.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// A non-empty cell could not be parsed as a timestamp.
    #[error("cannot parse '{value}' in column '{column}' (row {row}) as a timestamp")]
    Parse {
        column: String,
        row: usize,
        value: String,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
