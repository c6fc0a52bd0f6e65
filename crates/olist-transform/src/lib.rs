//! Olist data transformation utilities.
//!
//! This crate derives calendar features from timestamp columns:
//!
//! - **datetime**: timestamp parsing and canonical formatting
//! - **features**: per-row [`TimeFeatures`] and the [`extract_from_date`]
//!   column expansion over a Polars DataFrame
//! - **error**: [`TransformError`] for missing columns and unparseable values

pub mod datetime;
pub mod error;
pub mod features;

pub use datetime::{format_timestamp, parse_timestamp};
pub use error::{Result, TransformError};
pub use features::{DayTime, TimeFeatures, TimeField, extract_from_date};
