//! Tests for loading the full Olist dataset set.

use std::fs;
use std::path::Path;

use olist_ingest::{IngestError, OlistDataset, load_data, load_dataset};
use tempfile::TempDir;

fn write_dataset(dir: &Path, dataset: OlistDataset, contents: &str) {
    fs::write(dir.join(dataset.file_name()), contents).expect("write dataset");
}

fn write_all(dir: &Path) {
    for dataset in OlistDataset::ALL {
        let contents = match dataset {
            OlistDataset::Orders => {
                "order_id,customer_id,order_status,order_purchase_timestamp\n\
                 e481f51c,9ef432eb,delivered,2017-10-02 10:56:33\n\
                 53cdb2fc,b0830fb4,delivered,2018-07-24 20:41:37\n\
                 47770eb9,41ce2a54,shipped,2018-08-08 08:38:49\n"
            }
            OlistDataset::OrderItems => {
                "order_id,order_item_id,price,freight_value\n\
                 e481f51c,1,29.99,8.72\n\
                 53cdb2fc,1,118.7,22.76\n"
            }
            _ => "id,value\n1,a\n",
        };
        write_dataset(dir, dataset, contents);
    }
}

#[test]
fn load_data_reads_every_file() {
    let dir = TempDir::new().expect("temp dir");
    write_all(dir.path());

    let tables = load_data(dir.path()).expect("load data");

    assert_eq!(tables.orders.height(), 3);
    assert_eq!(tables.order_items.height(), 2);
    assert_eq!(tables.sellers.height(), 1);
    assert_eq!(tables.iter().count(), 8);
    let names: Vec<OlistDataset> = tables.iter().map(|(dataset, _)| dataset).collect();
    assert_eq!(names, OlistDataset::ALL.to_vec());
}

#[test]
fn load_data_missing_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    write_all(dir.path());
    fs::remove_file(dir.path().join(OlistDataset::Products.file_name())).expect("remove");

    let err = load_data(dir.path()).unwrap_err();
    match err {
        IngestError::FileNotFound { path } => {
            assert!(path.ends_with("olist_products_dataset.csv"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_data_missing_directory() {
    let err = load_data(Path::new("/nonexistent/olist")).unwrap_err();
    assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
}

#[test]
fn load_single_dataset() {
    let dir = TempDir::new().expect("temp dir");
    write_all(dir.path());

    let items = load_dataset(dir.path(), OlistDataset::OrderItems).expect("load items");
    assert_eq!(items.width(), 4);
    assert!(items.column("price").is_ok());
}
