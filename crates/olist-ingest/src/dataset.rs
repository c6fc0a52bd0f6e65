//! The fixed Olist dataset set.

use std::fmt;
use std::path::Path;

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span};

use crate::csv::{IngestOptions, read_csv_frame_with_options};
use crate::error::{IngestError, Result};

/// One of the eight files shipped with the Olist public dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OlistDataset {
    Customers,
    Geolocation,
    Orders,
    OrderItems,
    OrderPayments,
    OrderReviews,
    Products,
    Sellers,
}

impl OlistDataset {
    /// All datasets, in load order.
    pub const ALL: [OlistDataset; 8] = [
        OlistDataset::Customers,
        OlistDataset::Geolocation,
        OlistDataset::Orders,
        OlistDataset::OrderItems,
        OlistDataset::OrderPayments,
        OlistDataset::OrderReviews,
        OlistDataset::Products,
        OlistDataset::Sellers,
    ];

    /// File name inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            OlistDataset::Customers => "olist_customers_dataset.csv",
            OlistDataset::Geolocation => "olist_geolocation_dataset.csv",
            OlistDataset::Orders => "olist_orders_dataset.csv",
            OlistDataset::OrderItems => "olist_order_items_dataset.csv",
            OlistDataset::OrderPayments => "olist_order_payments_dataset.csv",
            OlistDataset::OrderReviews => "olist_order_reviews_dataset.csv",
            OlistDataset::Products => "olist_products_dataset.csv",
            OlistDataset::Sellers => "olist_sellers_dataset.csv",
        }
    }

    /// Short name used in logs and summaries.
    pub fn as_str(self) -> &'static str {
        match self {
            OlistDataset::Customers => "customers",
            OlistDataset::Geolocation => "geolocation",
            OlistDataset::Orders => "orders",
            OlistDataset::OrderItems => "order_items",
            OlistDataset::OrderPayments => "order_payments",
            OlistDataset::OrderReviews => "order_reviews",
            OlistDataset::Products => "products",
            OlistDataset::Sellers => "sellers",
        }
    }
}

impl fmt::Display for OlistDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every Olist table, loaded.
#[derive(Debug, Clone)]
pub struct OlistTables {
    pub customers: DataFrame,
    pub geolocation: DataFrame,
    pub orders: DataFrame,
    pub order_items: DataFrame,
    pub order_payments: DataFrame,
    pub order_reviews: DataFrame,
    pub products: DataFrame,
    pub sellers: DataFrame,
}

impl OlistTables {
    /// Borrow the frame for a dataset.
    pub fn get(&self, dataset: OlistDataset) -> &DataFrame {
        match dataset {
            OlistDataset::Customers => &self.customers,
            OlistDataset::Geolocation => &self.geolocation,
            OlistDataset::Orders => &self.orders,
            OlistDataset::OrderItems => &self.order_items,
            OlistDataset::OrderPayments => &self.order_payments,
            OlistDataset::OrderReviews => &self.order_reviews,
            OlistDataset::Products => &self.products,
            OlistDataset::Sellers => &self.sellers,
        }
    }

    /// Iterate datasets with their frames in load order.
    pub fn iter(&self) -> impl Iterator<Item = (OlistDataset, &DataFrame)> + '_ {
        OlistDataset::ALL
            .into_iter()
            .map(move |dataset| (dataset, self.get(dataset)))
    }
}

/// Load a single dataset file from `data_dir`.
pub fn load_dataset(data_dir: &Path, dataset: OlistDataset) -> Result<DataFrame> {
    load_dataset_with_options(data_dir, dataset, &IngestOptions::default())
}

fn load_dataset_with_options(
    data_dir: &Path,
    dataset: OlistDataset,
    options: &IngestOptions,
) -> Result<DataFrame> {
    let path = data_dir.join(dataset.file_name());
    let df = read_csv_frame_with_options(&path, options)?;
    info!(
        dataset = %dataset,
        rows = df.height(),
        columns = df.width(),
        "loaded dataset"
    );
    Ok(df)
}

/// Load all eight datasets from `data_dir`.
pub fn load_data(data_dir: &Path) -> Result<OlistTables> {
    load_data_with_options(data_dir, &IngestOptions::default())
}

/// Load all eight datasets from `data_dir` with explicit read options.
pub fn load_data_with_options(data_dir: &Path, options: &IngestOptions) -> Result<OlistTables> {
    if !data_dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: data_dir.to_path_buf(),
        });
    }
    let span = info_span!("load_data", dir = %data_dir.display());
    let _guard = span.enter();

    let load = |dataset| load_dataset_with_options(data_dir, dataset, options);
    Ok(OlistTables {
        customers: load(OlistDataset::Customers)?,
        geolocation: load(OlistDataset::Geolocation)?,
        orders: load(OlistDataset::Orders)?,
        order_items: load(OlistDataset::OrderItems)?,
        order_payments: load(OlistDataset::OrderPayments)?,
        order_reviews: load(OlistDataset::OrderReviews)?,
        products: load(OlistDataset::Products)?,
        sellers: load(OlistDataset::Sellers)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_are_unique() {
        let mut names: Vec<&str> = OlistDataset::ALL.iter().map(|d| d.file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn test_display_uses_short_name() {
        assert_eq!(OlistDataset::OrderItems.to_string(), "order_items");
        assert_eq!(
            OlistDataset::OrderItems.file_name(),
            "olist_order_items_dataset.csv"
        );
    }
}
