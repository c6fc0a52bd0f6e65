//! Per-category aggregates along a date column.
//!
//! Given a categorical column (e.g. `payment_type`), a dated column (e.g.
//! `order_purchase_year_month`) and a key column, this builds one series per
//! category with the count of non-null keys, or the sum of numeric keys, at
//! every date the category appears.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use tracing::debug;

use olist_common::{f64_values, is_numeric_dtype, parse_f64, string_values};

use crate::error::{Result, StatsError};

/// How the key column is aggregated per `(category, date)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    /// Number of non-null key values.
    #[default]
    Count,
    /// Sum of the key values; the key must be numeric.
    Sum,
}

/// Options for [`dated_category_series`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesOptions {
    /// Keep only the N most frequent categories. `None` keeps all categories
    /// in first-seen order.
    pub top: Option<usize>,
    pub aggregation: Aggregation,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            top: Some(5),
            aggregation: Aggregation::Count,
        }
    }
}

impl SeriesOptions {
    #[must_use]
    pub fn with_top(mut self, top: Option<usize>) -> Self {
        self.top = top;
        self
    }

    #[must_use]
    pub fn with_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = aggregation;
        self
    }
}

/// One point of a category series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: String,
    pub value: f64,
}

/// Aggregates of one category, ordered by date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySeries {
    pub category: String,
    pub points: Vec<SeriesPoint>,
}

// Numeric dates (years, YYYYMM) order numerically and sort before any other
// date; the rest order lexically.
fn compare_dates(a: &str, b: &str) -> Ordering {
    match (parse_f64(a), parse_f64(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name).map_err(|_| StatsError::ColumnNotFound {
        column: name.to_string(),
    })?;
    Ok(string_values(column))
}

/// Pick categories by frequency (ties broken by name) or first appearance.
fn select_categories(categories: &[Option<String>], top: Option<usize>) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for category in categories.iter().flatten() {
        let count = counts.entry(category.as_str()).or_insert(0);
        if *count == 0 {
            first_seen.push(category.as_str());
        }
        *count += 1;
    }

    let Some(top) = top else {
        return first_seen.into_iter().map(String::from).collect();
    };
    let mut ranked = first_seen;
    ranked.sort_by(|a, b| counts[b].cmp(&counts[a]).then_with(|| a.cmp(b)));
    ranked.into_iter().take(top).map(String::from).collect()
}

/// Count or sum `key` per `(categorical, dated_feature)` for the selected
/// categories.
///
/// Rows with a null category or date are skipped. Under
/// [`Aggregation::Sum`] null keys contribute nothing; under
/// [`Aggregation::Count`] they are not counted but the date still appears.
///
/// # Errors
///
/// [`StatsError::ColumnNotFound`] for a missing column and
/// [`StatsError::NotNumeric`] when summing a non-numeric key.
pub fn dated_category_series(
    df: &DataFrame,
    categorical: &str,
    dated_feature: &str,
    key: &str,
    options: &SeriesOptions,
) -> Result<Vec<CategorySeries>> {
    let categories = string_column(df, categorical)?;
    let dates = string_column(df, dated_feature)?;
    let key_column = df.column(key).map_err(|_| StatsError::ColumnNotFound {
        column: key.to_string(),
    })?;

    let keys: Vec<Option<f64>> = match options.aggregation {
        Aggregation::Count => string_values(key_column)
            .into_iter()
            .map(|value| value.map(|_| 1.0))
            .collect(),
        Aggregation::Sum => {
            if !is_numeric_dtype(key_column.dtype()) {
                return Err(StatsError::NotNumeric {
                    column: key.to_string(),
                    dtype: key_column.dtype().to_string(),
                });
            }
            f64_values(key_column)
        }
    };

    let selected = select_categories(&categories, options.top);
    let mut totals: HashMap<&str, BTreeMap<&str, f64>> = selected
        .iter()
        .map(|category| (category.as_str(), BTreeMap::new()))
        .collect();

    for ((category, date), value) in categories.iter().zip(&dates).zip(&keys) {
        let (Some(category), Some(date)) = (category, date) else {
            continue;
        };
        let Some(by_date) = totals.get_mut(category.as_str()) else {
            continue;
        };
        *by_date.entry(date.as_str()).or_insert(0.0) += value.unwrap_or(0.0);
    }

    let series: Vec<CategorySeries> = selected
        .iter()
        .map(|category| {
            let mut points: Vec<SeriesPoint> = totals
                .remove(category.as_str())
                .unwrap_or_default()
                .into_iter()
                .map(|(date, value)| SeriesPoint {
                    date: date.to_string(),
                    value,
                })
                .collect();
            points.sort_by(|a, b| compare_dates(&a.date, &b.date));
            CategorySeries {
                category: category.clone(),
                points,
            }
        })
        .collect();

    debug!(
        categorical,
        dated_feature,
        key,
        categories = series.len(),
        "built dated category series"
    );
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(String::from)).collect()
    }

    #[test]
    fn test_select_categories_by_frequency() {
        let categories = owned(&[
            Some("voucher"),
            Some("credit_card"),
            Some("boleto"),
            Some("credit_card"),
            None,
            Some("boleto"),
            Some("credit_card"),
        ]);
        assert_eq!(
            select_categories(&categories, Some(2)),
            vec!["credit_card", "boleto"]
        );
        assert_eq!(
            select_categories(&categories, None),
            vec!["voucher", "credit_card", "boleto"]
        );
    }

    #[test]
    fn test_select_categories_ties_by_name() {
        let categories = owned(&[Some("sp"), Some("rj"), Some("mg")]);
        assert_eq!(select_categories(&categories, Some(2)), vec!["mg", "rj"]);
    }

    #[test]
    fn test_compare_dates_numeric() {
        assert_eq!(compare_dates("201709", "201710"), Ordering::Less);
        assert_eq!(compare_dates("9", "10"), Ordering::Less);
        assert_eq!(compare_dates("March", "April"), Ordering::Greater);
    }

    #[test]
    fn test_compare_dates_mixed_is_total() {
        assert_eq!(compare_dates("10", "5x"), Ordering::Less);
        assert_eq!(compare_dates("5x", "9"), Ordering::Greater);

        let mut dates: Vec<String> = (0..30)
            .flat_map(|i| [format!("{i}"), format!("{i}x")])
            .collect();
        dates.reverse();
        dates.sort_by(|a, b| compare_dates(a, b));
        let numeric: Vec<String> = (0..30).map(|i| i.to_string()).collect();
        assert_eq!(dates[..30], numeric[..]);
        assert!(dates[30..].windows(2).all(|w| w[0] < w[1]));
    }
}
