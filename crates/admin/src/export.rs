//! CSV export of products, orders and customers.
//!
//! Shared by the `/export/*.csv` downloads and `gp-cli export`.

use std::io;
use std::str::FromStr;

use graphphile_core::catalog;
use serde::Serialize;
use thiserror::Error;

use crate::data::{customers, orders};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("unknown dataset: {0}")]
    UnknownDataset(String),
}

/// What to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Products,
    Orders,
    Customers,
}

impl Dataset {
    pub const ALL: [Self; 3] = [Self::Products, Self::Orders, Self::Customers];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Orders => "orders",
            Self::Customers => "customers",
        }
    }

    /// Download name, e.g. `products.csv`.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.csv", self.as_str())
    }

    /// Number of data rows the export will contain.
    #[must_use]
    pub fn record_count(self) -> usize {
        match self {
            Self::Products => catalog::products().len(),
            Self::Orders => orders::ORDERS.len(),
            Self::Customers => customers::CUSTOMERS.len(),
        }
    }
}

impl FromStr for Dataset {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_suffix(".csv").unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == name)
            .ok_or_else(|| ExportError::UnknownDataset(s.to_string()))
    }
}

#[derive(Serialize)]
struct ProductRecord<'a> {
    id: &'a str,
    name: &'a str,
    category: &'a str,
    collection: &'a str,
    price: u64,
    sizes: String,
    colors: String,
    featured: bool,
}

#[derive(Serialize)]
struct OrderRecord<'a> {
    id: &'a str,
    customer: &'a str,
    date: &'a str,
    amount: u64,
    status: &'a str,
    items: u32,
    payment_method: &'a str,
}

#[derive(Serialize)]
struct CustomerRecord<'a> {
    id: &'a str,
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    total_orders: u32,
    total_spent: u64,
    last_purchase: &'a str,
    status: &'a str,
}

/// Write `dataset` as CSV with a header row. Multi-valued fields are joined
/// with `|`.
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails.
pub fn write_csv<W: io::Write>(dataset: Dataset, out: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);
    match dataset {
        Dataset::Products => {
            for p in catalog::products() {
                writer.serialize(ProductRecord {
                    id: &p.id,
                    name: &p.name,
                    category: &p.category,
                    collection: &p.collection,
                    price: p.price.amount(),
                    sizes: p.sizes.join("|"),
                    colors: p
                        .colors
                        .iter()
                        .map(|c| c.name.as_str())
                        .collect::<Vec<_>>()
                        .join("|"),
                    featured: p.featured,
                })?;
            }
        }
        Dataset::Orders => {
            for o in orders::ORDERS {
                writer.serialize(OrderRecord {
                    id: o.id,
                    customer: o.customer,
                    date: o.date,
                    amount: o.amount.amount(),
                    status: o.status.as_str(),
                    items: o.items,
                    payment_method: o.payment_method,
                })?;
            }
        }
        Dataset::Customers => {
            for c in customers::CUSTOMERS {
                writer.serialize(CustomerRecord {
                    id: c.id,
                    name: c.name,
                    email: c.email,
                    phone: c.phone,
                    total_orders: c.total_orders,
                    total_spent: c.total_spent.amount(),
                    last_purchase: c.last_purchase.unwrap_or(""),
                    status: c.status.as_str(),
                })?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

/// Render `dataset` to an in-memory CSV string.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_csv_string(dataset: Dataset) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(dataset, &mut buf)?;
    String::from_utf8(buf).map_err(|e| ExportError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_parse() {
        assert_eq!("orders".parse::<Dataset>().unwrap(), Dataset::Orders);
        assert_eq!("customers.csv".parse::<Dataset>().unwrap(), Dataset::Customers);
        assert!(matches!(
            "invoices".parse::<Dataset>(),
            Err(ExportError::UnknownDataset(_))
        ));
    }

    #[test]
    fn test_each_export_has_header_and_one_row_per_record() {
        for dataset in Dataset::ALL {
            let csv = to_csv_string(dataset).unwrap();
            let lines: Vec<&str> = csv.lines().collect();
            assert_eq!(lines.len(), dataset.record_count() + 1, "{dataset:?}");
            assert!(lines[0].starts_with("id,"));
        }
    }

    #[test]
    fn test_order_export_columns() {
        let csv = to_csv_string(Dataset::Orders).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,customer,date,amount,status,items,payment_method"
        );
        assert_eq!(
            lines.next().unwrap(),
            "ORD123456,Amit Sharma,2023-05-15,4999,delivered,3,UPI"
        );
    }

    #[test]
    fn test_customer_without_purchases_exports_blank_date() {
        let csv = to_csv_string(Dataset::Customers).unwrap();
        let priya = csv.lines().find(|l| l.starts_with("4,")).unwrap();
        assert!(priya.contains(",0,0,,inactive"));
    }
}
