//! Error types for chart decoration.

use thiserror::Error;

/// Errors raised while preparing chart annotations.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Column not found in DataFrame.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// Percentages requested against a zero total.
    #[error("cannot compute percentages of a zero total")]
    ZeroTotal,

    /// Parallel inputs of different lengths.
    #[error("length mismatch: {left} {left_len} vs {right} {right_len}")]
    LengthMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },

    /// Colour name missing from the palette.
    #[error("unknown palette colour '{name}'")]
    UnknownColor { name: String },
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

pub(crate) fn ensure_same_len(
    left: &'static str,
    left_len: usize,
    right: &'static str,
    right_len: usize,
) -> Result<()> {
    if left_len == right_len {
        Ok(())
    } else {
        Err(ReportError::LengthMismatch {
            left,
            left_len,
            right,
            right_len,
        })
    }
}
