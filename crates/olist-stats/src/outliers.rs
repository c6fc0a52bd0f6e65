//! Interquartile-range outlier bounds.
//!
//! Bounds are the IQR fences `q25 - k * IQR` and `q75 + k * IQR`. Rows strictly
//! between the fences are inliers.
//!
//! The outlier side keeps the long-standing notebook behaviour by default:
//! a row is an outlier only when it is *below the lower fence and above the
//! upper fence at once*, which no value satisfies while `lower <= upper`. The
//! outlier frame is therefore empty unless [`OutlierRule::Disjunction`] is
//! selected.

use polars::prelude::{BooleanChunked, Column, DataFrame, NewChunkedArray};
use serde::{Deserialize, Serialize};
use tracing::debug;

use olist_common::{f64_values, is_numeric_dtype};

use crate::error::{Result, StatsError};
use crate::percentile::{percentile_linear, sorted_non_null};

/// Default multiplier applied to the IQR.
pub const DEFAULT_K_FACTOR: f64 = 1.5;

/// How rows outside the fences are selected as outliers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlierRule {
    /// `value < lower && value > upper`. Matches existing notebooks; always
    /// empty for `k_factor >= 0`.
    #[default]
    Conjunction,
    /// `value < lower || value > upper`.
    Disjunction,
}

/// Options for outlier partitioning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlierOptions {
    /// Multiplier applied to the IQR. Defaults to 1.5.
    pub k_factor: f64,
    /// Outlier selection rule. Defaults to [`OutlierRule::Conjunction`].
    pub rule: OutlierRule,
}

impl Default for OutlierOptions {
    fn default() -> Self {
        Self {
            k_factor: DEFAULT_K_FACTOR,
            rule: OutlierRule::default(),
        }
    }
}

impl OutlierOptions {
    /// Set the IQR multiplier.
    #[must_use]
    pub fn with_k_factor(mut self, k_factor: f64) -> Self {
        self.k_factor = k_factor;
        self
    }

    /// Set the outlier selection rule.
    #[must_use]
    pub fn with_rule(mut self, rule: OutlierRule) -> Self {
        self.rule = rule;
        self
    }
}

/// Quartiles and fences of a numeric sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IqrBounds {
    pub q25: f64,
    pub q75: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
}

impl IqrBounds {
    /// Compute bounds from an ascending sample. `None` when the sample is empty.
    pub fn from_sorted(sorted: &[f64], k_factor: f64) -> Option<Self> {
        let q25 = percentile_linear(sorted, 25.0)?;
        let q75 = percentile_linear(sorted, 75.0)?;
        let iqr = q75 - q25;
        let cutoff = iqr * k_factor;
        Some(Self {
            q25,
            q75,
            iqr,
            lower: q25 - cutoff,
            upper: q75 + cutoff,
        })
    }

    /// Strictly between the fences.
    pub fn is_inlier(&self, value: f64) -> bool {
        self.lower < value && value < self.upper
    }

    pub fn is_outlier(&self, value: f64, rule: OutlierRule) -> bool {
        match rule {
            OutlierRule::Conjunction => value < self.lower && value > self.upper,
            OutlierRule::Disjunction => value < self.lower || value > self.upper,
        }
    }
}

/// Rows of a frame split by IQR fences.
#[derive(Debug, Clone)]
pub struct OutlierPartition {
    pub bounds: IqrBounds,
    pub inliers: DataFrame,
    pub outliers: DataFrame,
}

fn numeric_column<'a>(df: &'a DataFrame, feature: &str) -> Result<&'a Column> {
    let column = df
        .column(feature)
        .map_err(|_| StatsError::ColumnNotFound {
            column: feature.to_string(),
        })?;
    if !is_numeric_dtype(column.dtype()) {
        return Err(StatsError::NotNumeric {
            column: feature.to_string(),
            dtype: column.dtype().to_string(),
        });
    }
    Ok(column)
}

fn bounds_for(feature: &str, values: &[Option<f64>], k_factor: f64) -> Result<IqrBounds> {
    let sorted = sorted_non_null(values);
    let bounds =
        IqrBounds::from_sorted(&sorted, k_factor).ok_or_else(|| StatsError::EmptyColumn {
            column: feature.to_string(),
        })?;
    debug!(
        feature,
        samples = sorted.len(),
        dropped = values.len() - sorted.len(),
        q25 = bounds.q25,
        q75 = bounds.q75,
        lower = bounds.lower,
        upper = bounds.upper,
        "computed iqr bounds"
    );
    Ok(bounds)
}

/// IQR bounds of a numeric column. Nulls and NaN are ignored.
///
/// # Errors
///
/// - [`StatsError::ColumnNotFound`] when `feature` is missing.
/// - [`StatsError::NotNumeric`] when `feature` is not an integer or float column.
/// - [`StatsError::EmptyColumn`] when no non-null values remain.
pub fn iqr_bounds(df: &DataFrame, feature: &str, k_factor: f64) -> Result<IqrBounds> {
    let column = numeric_column(df, feature)?;
    bounds_for(feature, &f64_values(column), k_factor)
}

/// Split the rows of `df` into inliers and outliers of `feature`.
///
/// Rows whose value is null belong to neither frame. Both frames keep every
/// column of `df` and the original row order.
pub fn partition_outliers(
    df: &DataFrame,
    feature: &str,
    options: &OutlierOptions,
) -> Result<OutlierPartition> {
    let column = numeric_column(df, feature)?;
    let values = f64_values(column);
    let bounds = bounds_for(feature, &values, options.k_factor)?;

    let inlier_mask: Vec<bool> = values
        .iter()
        .map(|value| value.is_some_and(|v| bounds.is_inlier(v)))
        .collect();
    let outlier_mask: Vec<bool> = values
        .iter()
        .map(|value| value.is_some_and(|v| bounds.is_outlier(v, options.rule)))
        .collect();

    let inliers = df.filter(&BooleanChunked::from_slice("inliers".into(), &inlier_mask))?;
    let outliers = df.filter(&BooleanChunked::from_slice("outliers".into(), &outlier_mask))?;

    debug!(
        feature,
        rule = ?options.rule,
        inliers = inliers.height(),
        outliers = outliers.height(),
        "partitioned rows"
    );
    Ok(OutlierPartition {
        bounds,
        inliers,
        outliers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_sorted() {
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
        let bounds = IqrBounds::from_sorted(&sample, DEFAULT_K_FACTOR).unwrap();
        assert_eq!(bounds.q25, 3.25);
        assert_eq!(bounds.q75, 7.75);
        assert_eq!(bounds.iqr, 4.5);
        assert_eq!(bounds.lower, -3.5);
        assert_eq!(bounds.upper, 14.5);
    }

    #[test]
    fn test_bounds_empty_sample() {
        assert!(IqrBounds::from_sorted(&[], DEFAULT_K_FACTOR).is_none());
    }

    #[test]
    fn test_inlier_bounds_are_exclusive() {
        let bounds = IqrBounds::from_sorted(&[0.0, 10.0], 0.0).unwrap();
        assert_eq!((bounds.lower, bounds.upper), (2.5, 7.5));
        assert!(!bounds.is_inlier(2.5));
        assert!(bounds.is_inlier(5.0));
        assert!(!bounds.is_inlier(7.5));
    }

    #[test]
    fn test_conjunction_never_matches_ordered_fences() {
        let bounds = IqrBounds::from_sorted(&[1.0, 2.0, 3.0, 4.0], 1.5).unwrap();
        for v in [-1.0e9, bounds.lower - 1.0, 0.0, bounds.upper + 1.0, 1.0e9] {
            assert!(!bounds.is_outlier(v, OutlierRule::Conjunction));
        }
        assert!(bounds.is_outlier(1.0e9, OutlierRule::Disjunction));
        assert!(bounds.is_outlier(-1.0e9, OutlierRule::Disjunction));
    }

    #[test]
    fn test_options_default() {
        let options = OutlierOptions::default();
        assert_eq!(options.k_factor, 1.5);
        assert_eq!(options.rule, OutlierRule::Conjunction);
        let options = options.with_k_factor(3.0).with_rule(OutlierRule::Disjunction);
        assert_eq!(options.k_factor, 3.0);
        assert_eq!(options.rule, OutlierRule::Disjunction);
    }
}
