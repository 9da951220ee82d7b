//! Catalog views for the back office: dashboard figures, product rows with
//! demo stock levels, and category and collection counts.
//!
//! Stock is not tracked anywhere, so every listing draws a fresh random level.
//! Callers pass the generator in, which lets tests seed it.

use graphphile_core::{Collection, Price, Product, catalog};
use rand::Rng;

/// Stock below this is flagged.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Version banner shown on the dashboard.
pub const SYSTEM_STATUS: &str = "You are running Graphphile MVP v1.0. All systems operational.";

/// Headline figures on the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct DashboardStats {
    pub total_sales: Price,
    pub total_orders: u32,
    pub total_customers: u32,
    pub pending_orders: u32,
}

pub const DASHBOARD_STATS: DashboardStats = DashboardStats {
    total_sales: Price::new(892_750),
    total_orders: 32,
    total_customers: 18,
    pending_orders: 5,
};

/// A product on the dashboard's inventory tab.
#[derive(Debug, Clone)]
pub struct DashboardProduct {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    /// Catalog price run through the dollar conversion.
    pub price: Price,
    pub stock: u32,
    pub featured: bool,
}

/// Every catalog product with its converted price and a stock level in 1..=50.
pub fn dashboard_products<R: Rng + ?Sized>(rng: &mut R) -> Vec<DashboardProduct> {
    catalog::products()
        .iter()
        .map(|p| DashboardProduct {
            id: &p.id,
            name: &p.name,
            category: &p.category,
            price: Price::from_usd_approx(p.price.amount()),
            stock: rng.random_range(1..=50),
            featured: p.featured,
        })
        .collect()
}

/// Listing state of a product row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    Active,
    Draft,
}

impl ListingStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Draft => "Draft",
        }
    }
}

/// A row in the products table.
#[derive(Debug, Clone)]
pub struct ProductRow {
    pub product: &'static Product,
    pub stock: u32,
    pub status: ListingStatus,
}

impl ProductRow {
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }
}

/// Products whose name or description contains `query`, limited to
/// `category` when given, each with a stock level in 0..100.
pub fn product_rows<R: Rng + ?Sized>(
    rng: &mut R,
    query: &str,
    category: Option<&str>,
) -> Vec<ProductRow> {
    let needle = query.trim().to_lowercase();
    catalog::products()
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .filter(|p| category.is_none_or(|c| p.category == c))
        .map(|product| ProductRow {
            product,
            stock: rng.random_range(0..100),
            status: if product.featured {
                ListingStatus::Active
            } else {
                ListingStatus::Draft
            },
        })
        .collect()
}

/// A category with its product count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCount {
    pub name: &'static str,
    pub products: usize,
}

impl CategoryCount {
    /// `1 product` or `N products`.
    #[must_use]
    pub fn product_label(&self) -> String {
        if self.products == 1 {
            "1 product".to_string()
        } else {
            format!("{} products", self.products)
        }
    }
}

/// Categories in first-seen order with their product counts.
#[must_use]
pub fn category_counts() -> Vec<CategoryCount> {
    catalog::categories()
        .into_iter()
        .map(|name| CategoryCount {
            name,
            products: catalog::products()
                .iter()
                .filter(|p| p.category == name)
                .count(),
        })
        .collect()
}

/// A collection with its product count.
#[derive(Debug, Clone, Copy)]
pub struct CollectionCount {
    pub collection: &'static Collection,
    pub products: usize,
}

#[must_use]
pub fn collection_counts() -> Vec<CollectionCount> {
    catalog::collections()
        .iter()
        .map(|collection| CollectionCount {
            collection,
            products: catalog::products_by_collection(&collection.name).len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_dashboard_products_convert_price_and_bound_stock() {
        let mut rng = StdRng::seed_from_u64(7);
        let rows = dashboard_products(&mut rng);
        assert_eq!(rows.len(), catalog::products().len());
        for (row, product) in rows.iter().zip(catalog::products()) {
            assert_eq!(row.price.amount(), product.price.amount() * 83);
            assert!((1..=50).contains(&row.stock));
        }
    }

    #[test]
    fn test_product_rows_filter_and_status() {
        let mut rng = StdRng::seed_from_u64(1);
        let all = product_rows(&mut rng, "", None);
        assert_eq!(all.len(), catalog::products().len());
        assert!(all.iter().all(|r| r.stock < 100));
        for row in &all {
            let expected = if row.product.featured {
                ListingStatus::Active
            } else {
                ListingStatus::Draft
            };
            assert_eq!(row.status, expected);
        }

        let category = catalog::categories()[0];
        let filtered = product_rows(&mut rng, "", Some(category));
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|r| r.product.category == category));
        assert!(product_rows(&mut rng, "no such product anywhere", None).is_empty());
    }

    #[test]
    fn test_low_stock_flag() {
        let row = ProductRow {
            product: &catalog::products()[0],
            stock: 9,
            status: ListingStatus::Draft,
        };
        assert!(row.is_low_stock());
        assert!(!ProductRow { stock: 10, ..row }.is_low_stock());
    }

    #[test]
    fn test_category_counts_cover_catalog() {
        let counts = category_counts();
        let total: usize = counts.iter().map(|c| c.products).sum();
        assert_eq!(total, catalog::products().len());
        assert_eq!(
            CategoryCount {
                name: "x",
                products: 1
            }
            .product_label(),
            "1 product"
        );
    }
}
