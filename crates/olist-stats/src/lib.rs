//! Descriptive statistics for Olist EDA.
//!
//! - **percentile**: linear-interpolation percentiles over sorted samples
//! - **outliers**: interquartile-range bounds and inlier/outlier partitioning
//! - **dated**: per-category counts or sums along a date column, the data
//!   behind dated line charts

pub mod dated;
pub mod error;
pub mod outliers;
pub mod percentile;

pub use dated::{Aggregation, CategorySeries, SeriesOptions, SeriesPoint, dated_category_series};
pub use error::{Result, StatsError};
pub use outliers::{
    DEFAULT_K_FACTOR, IqrBounds, OutlierOptions, OutlierPartition, OutlierRule, iqr_bounds,
    partition_outliers,
};
pub use percentile::{percentile_linear, sorted_non_null};
