//! Olist data ingestion.
//!
//! This crate loads the Brazilian e-commerce (Olist) public dataset, a fixed
//! set of eight CSV files, into Polars DataFrames.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use olist_ingest::{OlistDataset, load_data, load_dataset};
//!
//! let tables = load_data(Path::new("data"))?;
//! println!("{} orders", tables.orders.height());
//!
//! let sellers = load_dataset(Path::new("data"), OlistDataset::Sellers)?;
//! ```

mod csv;
mod dataset;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{IngestOptions, read_csv_frame, read_csv_frame_with_options};

// === Dataset Loading ===
pub use dataset::{OlistDataset, OlistTables, load_data, load_data_with_options, load_dataset};
