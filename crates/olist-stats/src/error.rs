//! Error types for statistics operations.

use thiserror::Error;

/// Errors raised while computing statistics over a DataFrame column.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Column not found in DataFrame.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// Column exists but does not hold numbers.
    #[error("column '{column}' has non-numeric type {dtype}")]
    NotNumeric { column: String, dtype: String },

    /// Column has no non-null values, so percentiles are undefined.
    #[error("column '{column}' has no non-null values")]
    EmptyColumn { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for StatsError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for statistics operations.
pub type Result<T> = std::result::Result<T, StatsError>;
