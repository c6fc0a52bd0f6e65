//! Typed column readers.
//!
//! Column presence is the caller's concern (each crate maps a missing column to
//! its own error); these helpers only turn an existing column into typed values.

use polars::prelude::{AnyValue, Column, DataType};

use crate::values::{any_to_f64, any_to_string_non_empty};

/// Returns true for the integer and floating-point dtypes.
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Reads a column as optional strings; nulls and blank cells become `None`.
pub fn string_values(column: &Column) -> Vec<Option<String>> {
    (0..column.len())
        .map(|idx| any_to_string_non_empty(column.get(idx).unwrap_or(AnyValue::Null)))
        .collect()
}

/// Reads a column as optional `f64`; nulls, NaN and unparseable cells become `None`.
pub fn f64_values(column: &Column) -> Vec<Option<f64>> {
    (0..column.len())
        .map(|idx| any_to_f64(column.get(idx).unwrap_or(AnyValue::Null)))
        .collect()
}
