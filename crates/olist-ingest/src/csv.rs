//! CSV reading into Polars DataFrames.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Options for reading a dataset file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Rows scanned to infer column types. `None` scans the whole file.
    ///
    /// Olist columns such as `product_weight_g` look integral for thousands of
    /// rows before the first blank, so a full scan is the default.
    pub infer_schema_length: Option<usize>,

    /// Stop after this many data rows.
    pub n_rows: Option<usize>,
}

impl IngestOptions {
    /// Set the schema inference window.
    #[must_use]
    pub fn with_infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = rows;
        self
    }

    /// Limit the number of rows read.
    #[must_use]
    pub fn with_n_rows(mut self, rows: Option<usize>) -> Self {
        self.n_rows = rows;
        self
    }
}

/// Reads a headed CSV file into a DataFrame with default options.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    read_csv_frame_with_options(path, &IngestOptions::default())
}

/// Reads a headed CSV file into a DataFrame.
///
/// Timestamps are left as strings; calendar parsing happens in the transform
/// crate where parse failures can be reported per row.
pub fn read_csv_frame_with_options(path: &Path, options: &IngestOptions) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(options.infer_schema_length)
        .with_n_rows(options.n_rows)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read csv"
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_frame_basic() {
        let file = create_temp_csv(
            "order_id,order_status,order_purchase_timestamp\n\
             e481f51c,delivered,2017-10-02 10:56:33\n\
             53cdb2fc,delivered,2018-07-24 20:41:37\n",
        );
        let df = read_csv_frame(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
        assert!(df.column("order_purchase_timestamp").is_ok());
    }

    #[test]
    fn test_read_csv_frame_n_rows() {
        let file = create_temp_csv("price\n1.5\n2.5\n3.5\n");
        let options = IngestOptions::default().with_n_rows(Some(2));
        let df = read_csv_frame_with_options(file.path(), &options).unwrap();
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn test_read_csv_frame_missing_file() {
        let err = read_csv_frame(Path::new("/nonexistent/olist_orders_dataset.csv")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
