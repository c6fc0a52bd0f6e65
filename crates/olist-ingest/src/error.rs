//! Error types for Olist data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the dataset files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Data directory not found.
    #[error("data directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/olist_orders_dataset.csv"),
        };
        assert_eq!(
            err.to_string(),
            "CSV file not found: /data/olist_orders_dataset.csv"
        );
    }

    #[test]
    fn test_csv_parse_display() {
        let err = IngestError::CsvParse {
            path: PathBuf::from("olist_orders_dataset.csv"),
            message: "invalid utf-8".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse CSV olist_orders_dataset.csv: invalid utf-8"
        );
    }
}
