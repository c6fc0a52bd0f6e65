//! Command stages with typed results.
//!
//! Each function reads its input, runs one analysis and returns a value the
//! binary prints. Nothing here writes to stdout.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::{info, info_span};

use olist_ingest::{OlistDataset, load_data, read_csv_frame};
use olist_report::{AnnotationPlan, ValueCount, countplot_annotations};
use olist_stats::{IqrBounds, OutlierOptions, partition_outliers};
use olist_transform::extract_from_date;

/// Shape of one loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetShape {
    pub dataset: OlistDataset,
    pub rows: usize,
    pub columns: usize,
}

/// Outcome of an outlier run on one feature.
#[derive(Debug, Clone)]
pub struct OutlierReport {
    pub feature: String,
    pub bounds: IqrBounds,
    pub rows: usize,
    pub inliers: usize,
    pub outliers: usize,
}

impl OutlierReport {
    /// Rows in neither frame: null values, and values outside the open
    /// inlier interval that the rule does not flag.
    pub fn unassigned(&self) -> usize {
        self.rows.saturating_sub(self.inliers + self.outliers)
    }
}

/// Value counts plus the label plan for a count plot.
#[derive(Debug, Clone)]
pub struct CountReport {
    pub column: String,
    pub rows: usize,
    pub counts: Vec<ValueCount>,
    pub plan: AnnotationPlan,
}

/// Load every Olist dataset under `data_dir` and report its shape.
pub fn load_shapes(data_dir: &Path) -> Result<Vec<DatasetShape>> {
    let tables = load_data(data_dir)
        .with_context(|| format!("load datasets from {}", data_dir.display()))?;
    Ok(tables
        .iter()
        .map(|(dataset, df)| DatasetShape {
            dataset,
            rows: df.height(),
            columns: df.width(),
        })
        .collect())
}

/// Read `input` and append time features derived from `column`.
pub fn derive_features(input: &Path, column: &str, prefix: &str) -> Result<DataFrame> {
    let span = info_span!("features", column, prefix);
    let _guard = span.enter();
    let mut df = read_csv_frame(input).with_context(|| format!("read {}", input.display()))?;
    let before = df.width();
    extract_from_date(&mut df, column, prefix)
        .with_context(|| format!("derive time features from '{column}'"))?;
    info!(rows = df.height(), added = df.width() - before, "time features derived");
    Ok(df)
}

/// Write `df` as CSV with a header row.
pub fn write_csv(df: &mut DataFrame, output: &Path) -> Result<()> {
    let mut file =
        File::create(output).with_context(|| format!("create {}", output.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("write {}", output.display()))?;
    info!(path = %output.display(), rows = df.height(), "csv written");
    Ok(())
}

/// IQR bounds and partition sizes for `feature` in `input`.
pub fn outlier_report(input: &Path, feature: &str, options: &OutlierOptions) -> Result<OutlierReport> {
    let df = read_csv_frame(input).with_context(|| format!("read {}", input.display()))?;
    let partition = partition_outliers(&df, feature, options)
        .with_context(|| format!("partition '{feature}'"))?;
    let report = OutlierReport {
        feature: feature.to_string(),
        bounds: partition.bounds,
        rows: df.height(),
        inliers: partition.inliers.height(),
        outliers: partition.outliers.height(),
    };
    info!(
        feature,
        inliers = report.inliers,
        outliers = report.outliers,
        unassigned = report.unassigned(),
        "outliers partitioned"
    );
    Ok(report)
}

/// Value counts of `column` in `input` with percentage labels.
pub fn count_report(input: &Path, column: &str) -> Result<CountReport> {
    let df = read_csv_frame(input).with_context(|| format!("read {}", input.display()))?;
    let (counts, plan) =
        countplot_annotations(&df, column).with_context(|| format!("count '{column}'"))?;
    Ok(CountReport {
        column: column.to_string(),
        rows: df.height(),
        counts,
        plan,
    })
}
