//! Integration tests for the command stages.

use std::fs;
use std::path::{Path, PathBuf};

use olist_cli::pipeline::{count_report, derive_features, load_shapes, outlier_report, write_csv};
use olist_ingest::{OlistDataset, read_csv_frame};
use olist_stats::{OutlierOptions, OutlierRule};
use olist_transform::TimeField;
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn orders_csv(dir: &Path) -> PathBuf {
    write_file(
        dir,
        "orders.csv",
        "order_id,order_status,order_purchase_timestamp\n\
         o1,delivered,2017-10-02 10:56:33\n\
         o2,delivered,2018-07-24 20:41:37\n\
         o3,shipped,2018-08-08 08:38:49\n\
         o4,delivered,2017-11-18 19:28:06\n",
    )
}

#[test]
fn load_shapes_reports_every_dataset() {
    let dir = TempDir::new().unwrap();
    for dataset in OlistDataset::ALL {
        write_file(dir.path(), dataset.file_name(), "id,value\na,1\nb,2\n");
    }

    let shapes = load_shapes(dir.path()).unwrap();
    assert_eq!(shapes.len(), 8);
    assert!(shapes.iter().all(|shape| shape.rows == 2 && shape.columns == 2));
    assert_eq!(shapes[0].dataset, OlistDataset::Customers);
}

#[test]
fn load_shapes_missing_file_has_context() {
    let dir = TempDir::new().unwrap();
    let err = load_shapes(dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains("load datasets from"));
}

#[test]
fn features_round_trip_through_csv() {
    let dir = TempDir::new().unwrap();
    let input = orders_csv(dir.path());

    let mut df = derive_features(&input, "order_purchase_timestamp", "order_purchase").unwrap();
    assert_eq!(df.width(), 3 + 11);

    let output = dir.path().join("features.csv");
    write_csv(&mut df, &output).unwrap();
    let reread = read_csv_frame(&output).unwrap();
    assert_eq!(reread.height(), 4);
    assert_eq!(reread.width(), 14);

    let day_time: Vec<String> = reread
        .column(&TimeField::DayTime.column_name("order_purchase"))
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap_or_default().to_string())
        .collect();
    assert_eq!(day_time, vec!["morning", "night", "morning", "night"]);
    assert!(reread.column("order_purchaseday_time").is_ok());
    assert!(reread.column("order_purchase_day_time").is_err());
}

#[test]
fn features_unknown_column_fails() {
    let dir = TempDir::new().unwrap();
    let input = orders_csv(dir.path());
    let err = derive_features(&input, "order_approved_at", "order_approved").unwrap_err();
    assert!(format!("{err:#}").contains("order_approved_at"));
}

#[test]
fn outlier_report_counts() {
    let dir = TempDir::new().unwrap();
    let mut csv = String::from("order_id,price\n");
    for (idx, price) in [1, 2, 3, 4, 5, 6, 7, 8, 9, 100].into_iter().enumerate() {
        csv.push_str(&format!("o{idx},{price}\n"));
    }
    csv.push_str("o10,\n");
    let input = write_file(dir.path(), "items.csv", &csv);

    let report = outlier_report(&input, "price", &OutlierOptions::default()).unwrap();
    assert_eq!(report.rows, 11);
    assert_eq!(report.inliers, 9);
    assert_eq!(report.outliers, 0);
    assert_eq!(report.unassigned(), 2);

    let options = OutlierOptions::default().with_rule(OutlierRule::Disjunction);
    let report = outlier_report(&input, "price", &options).unwrap();
    assert_eq!(report.outliers, 1);
    assert_eq!(report.unassigned(), 1);
    assert_eq!(report.bounds.upper, 14.5);
}

#[test]
fn count_report_labels() {
    let dir = TempDir::new().unwrap();
    let input = orders_csv(dir.path());
    let report = count_report(&input, "order_status").unwrap();
    assert_eq!(report.rows, 4);
    insta::assert_json_snapshot!(report.plan.texts(), @r###"
    [
      "75.0%",
      "25.0%"
    ]
    "###);
}
