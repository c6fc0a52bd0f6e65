//! Shared utilities for the Olist EDA crates.
//!
//! This crate provides Polars helpers used across the workspace: `AnyValue`
//! conversions and typed column readers.

pub mod columns;
pub mod values;

// Re-export commonly used functions at crate root for convenience
pub use columns::{f64_values, is_numeric_dtype, string_values};
pub use values::{any_to_f64, any_to_string, any_to_string_non_empty, format_numeric, parse_f64};
