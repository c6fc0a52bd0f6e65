//! Tests for IQR bounds and partitioning over DataFrames.

use polars::prelude::{AnyValue, Column, DataFrame, IntoColumn, NamedFrom, Series};

use olist_stats::{
    DEFAULT_K_FACTOR, OutlierOptions, OutlierRule, StatsError, iqr_bounds, partition_outliers,
};

fn items(prices: Vec<Option<f64>>) -> DataFrame {
    let ids: Vec<String> = (0..prices.len()).map(|i| format!("item-{i}")).collect();
    let cols: Vec<Column> = vec![
        Series::new("order_id".into(), ids).into_column(),
        Series::new("price".into(), prices).into_column(),
    ];
    DataFrame::new(cols).unwrap()
}

fn sample() -> DataFrame {
    items(
        [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0]
            .into_iter()
            .map(Some)
            .collect(),
    )
}

#[test]
fn bounds_for_reference_sample() {
    let bounds = iqr_bounds(&sample(), "price", DEFAULT_K_FACTOR).unwrap();
    insta::assert_json_snapshot!(bounds, @r###"
    {
      "q25": 3.25,
      "q75": 7.75,
      "iqr": 4.5,
      "lower": -3.5,
      "upper": 14.5
    }
    "###);
}

#[test]
fn default_partition_keeps_conjunction_rule() {
    let partition = partition_outliers(&sample(), "price", &OutlierOptions::default()).unwrap();

    assert_eq!(partition.inliers.height(), 9);
    assert_eq!(partition.outliers.height(), 0);
    assert_eq!(partition.outliers.width(), 2);
}

#[test]
fn disjunction_rule_selects_far_values() {
    let options = OutlierOptions::default().with_rule(OutlierRule::Disjunction);
    let partition = partition_outliers(&sample(), "price", &options).unwrap();

    assert_eq!(partition.inliers.height(), 9);
    assert_eq!(partition.outliers.height(), 1);
    let id = partition.outliers.column("order_id").unwrap().get(0).unwrap();
    assert_eq!(id, AnyValue::String("item-9"));
}

#[test]
fn k_factor_widens_fences() {
    let options = OutlierOptions::default()
        .with_k_factor(25.0)
        .with_rule(OutlierRule::Disjunction);
    let partition = partition_outliers(&sample(), "price", &options).unwrap();

    assert_eq!(partition.bounds.upper, 7.75 + 4.5 * 25.0);
    assert_eq!(partition.inliers.height(), 10);
    assert_eq!(partition.outliers.height(), 0);
}

#[test]
fn nulls_are_ignored() {
    let df = items(vec![Some(1.0), None, Some(2.0), Some(3.0), None, Some(4.0)]);
    let bounds = iqr_bounds(&df, "price", DEFAULT_K_FACTOR).unwrap();
    assert_eq!(bounds.q25, 1.75);
    assert_eq!(bounds.q75, 3.25);

    let options = OutlierOptions::default().with_rule(OutlierRule::Disjunction);
    let partition = partition_outliers(&df, "price", &options).unwrap();
    assert_eq!(partition.inliers.height() + partition.outliers.height(), 4);
}

#[test]
fn integer_columns_are_numeric() {
    let df = DataFrame::new(vec![
        Series::new("payment_installments".into(), vec![1i64, 1, 2, 3, 10]).into_column(),
    ])
    .unwrap();
    let bounds = iqr_bounds(&df, "payment_installments", 1.5).unwrap();
    assert_eq!(bounds.q25, 1.0);
    assert_eq!(bounds.q75, 3.0);
}

#[test]
fn empty_column_is_error() {
    let df = items(Vec::new());
    let err = iqr_bounds(&df, "price", DEFAULT_K_FACTOR).unwrap_err();
    assert!(matches!(err, StatsError::EmptyColumn { .. }));

    let df = items(vec![None, None]);
    let err = partition_outliers(&df, "price", &OutlierOptions::default()).unwrap_err();
    assert!(matches!(err, StatsError::EmptyColumn { .. }));
}

#[test]
fn missing_and_non_numeric_columns() {
    let df = sample();
    let err = iqr_bounds(&df, "freight_value", DEFAULT_K_FACTOR).unwrap_err();
    assert!(matches!(err, StatsError::ColumnNotFound { .. }));

    let err = iqr_bounds(&df, "order_id", DEFAULT_K_FACTOR).unwrap_err();
    assert!(matches!(err, StatsError::NotNumeric { .. }));
}
