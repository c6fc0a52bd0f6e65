//! Value counts of a categorical column, drawn as a count plot.

use std::collections::HashMap;

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use tracing::debug;

use olist_common::string_values;

use crate::annotations::{Align, Annotation, AnnotationPlan, AnnotationStyle, Bar};
use crate::error::{ReportError, Result};

const BAR_WIDTH: f64 = 0.8;

/// Occurrences of one value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
    /// Share of all rows, nulls included, in percent.
    pub percent: f64,
}

/// Count the non-null values of `column` in first-seen order.
///
/// Percentages are taken over `df.height()`, so null rows lower every share
/// without getting a bar of their own.
///
/// # Errors
///
/// [`ReportError::ColumnNotFound`] when `column` is missing.
pub fn value_counts(df: &DataFrame, column: &str) -> Result<Vec<ValueCount>> {
    let values = df
        .column(column)
        .map(string_values)
        .map_err(|_| ReportError::ColumnNotFound {
            column: column.to_string(),
        })?;

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values.into_iter().flatten() {
        match index.get(&value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    let total = df.height() as f64;
    Ok(counts
        .into_iter()
        .map(|(value, count)| ValueCount {
            value,
            count,
            percent: 100.0 * count as f64 / total,
        })
        .collect())
}

/// Bars and `"{pct:.1}%"` labels for a count plot of `column`.
///
/// Bar `i` is centred on `x = i`; each label is anchored at the bar's right
/// edge, level with its top.
///
/// # Errors
///
/// [`ReportError::ColumnNotFound`] when `column` is missing and
/// [`ReportError::ZeroTotal`] for an empty frame.
pub fn countplot_annotations(
    df: &DataFrame,
    column: &str,
) -> Result<(Vec<ValueCount>, AnnotationPlan)> {
    let counts = value_counts(df, column)?;
    if df.height() == 0 {
        return Err(ReportError::ZeroTotal);
    }

    let size = AnnotationStyle::default().size;
    let annotations = counts
        .iter()
        .enumerate()
        .map(|(idx, count)| {
            let bar = Bar {
                x: idx as f64 - BAR_WIDTH / 2.0,
                y: 0.0,
                width: BAR_WIDTH,
                height: count.count as f64,
            };
            Annotation {
                text: format!("{:.1}%", count.percent),
                x: bar.x + bar.width,
                y: bar.height,
                align: Align::Center,
                size,
                color: None,
                linespacing: None,
            }
        })
        .collect();

    debug!(column, bars = counts.len(), rows = df.height(), "count plot");
    Ok((
        counts,
        AnnotationPlan {
            annotations,
            title: None,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn test_many_distinct_values_keep_first_seen_order() {
        let cities: Vec<String> = (0..2000).map(|i| format!("city-{}", i % 500)).collect();
        let df = DataFrame::new(vec![
            Series::new("geolocation_city".into(), cities).into_column(),
        ])
        .unwrap();

        let counts = value_counts(&df, "geolocation_city").unwrap();
        assert_eq!(counts.len(), 500);
        assert!(counts.iter().all(|c| c.count == 4 && c.percent == 0.2));
        assert_eq!(counts[0].value, "city-0");
        assert_eq!(counts[499].value, "city-499");
    }
}
