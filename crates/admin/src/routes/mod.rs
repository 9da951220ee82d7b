//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! # Auth
//! GET  /auth/login             - Login page
//! POST /auth/login             - Demo credential check
//! POST /auth/logout            - Logout
//!
//! # Dashboard
//! GET  /                       - Totals and inventory table
//!
//! # Products
//! GET  /products               - Product listing (?q=&category=)
//! GET  /products/new           - Add product form
//! GET  /products/{id}/edit     - Edit product form
//! POST /products               - Validate and save
//! POST /products/bulk          - Bulk actions on selected products
//! GET  /collections            - Collections with product counts
//! GET  /categories             - Categories with product counts
//! GET  /reviews                - Product reviews (?q=&status=)
//! GET  /import-export          - Import/export page
//! GET  /export/{dataset}       - CSV download (products.csv, orders.csv, customers.csv)
//!
//! # Orders
//! GET  /orders                 - Order listing (?q=&status=)
//! GET  /orders/{id}            - Order detail
//! GET  /returns                - Returns and refunds (?q=&status=)
//! GET  /shipments              - Shipments (?q=&status=)
//!
//! # Customers
//! GET  /customers              - Customer listing (?q=&status=)
//! GET  /customers/{id}         - Customer detail
//! GET  /segments               - Customer segments
//! GET  /campaigns              - Email and SMS campaigns
//!
//! # Content
//! GET  /content/homepage       - Homepage builder
//! GET  /content/banners        - Banners (?q=&status=)
//! GET  /content/blocks         - Content blocks (?q=&type=)
//! GET  /content/blog           - Blog posts (?q=)
//! GET  /media                  - Media library (?q=&type=)
//! ```

pub mod auth;
pub mod catalog;
pub mod content;
pub mod customers;
pub mod dashboard;
pub mod fulfillment;
pub mod import_export;
pub mod marketing;
pub mod orders;
pub mod products;

use askama::Template;
use axum::{
    Router,
    response::Html,
    routing::{get, post},
};

use crate::components::DataTable;
use crate::filters;
use crate::middleware::AdminPage;
use crate::state::AppState;

/// Render a template, logging and masking render failures.
pub fn render(template: &impl Template) -> Html<String> {
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
}

/// Decode a raw query string into ordered pairs, keeping repeated keys.
#[must_use]
pub fn query_pairs(raw: Option<&str>) -> Vec<(String, String)> {
    raw.map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// First value for `key`, or `""`.
#[must_use]
pub fn param<'a>(pairs: &'a [(String, String)], key: &str) -> &'a str {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map_or("", |(_, v)| v.as_str())
}

/// Header button linking to another page.
#[derive(Debug, Clone)]
pub struct PageAction {
    pub href: String,
    pub label: String,
}

impl PageAction {
    #[must_use]
    pub fn new(href: &str, label: &str) -> Self {
        Self {
            href: href.to_string(),
            label: label.to_string(),
        }
    }
}

/// A page that is a heading plus one data table.
#[derive(Template)]
#[template(path = "list.html")]
pub struct ListTemplate {
    pub page: AdminPage,
    pub title: String,
    pub subtitle: Option<String>,
    pub action: Option<PageAction>,
    pub table: DataTable,
}

impl ListTemplate {
    #[must_use]
    pub fn new(page: AdminPage, title: &str, table: DataTable) -> Self {
        Self {
            page,
            title: title.to_string(),
            subtitle: None,
            action: None,
            table,
        }
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn action(mut self, action: PageAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::save))
        .route("/new", get(products::new_product))
        .route("/{id}/edit", get(products::edit))
        .route("/bulk", post(products::bulk))
}

/// Create the content routes router.
pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/homepage", get(content::homepage))
        .route("/banners", get(content::banners))
        .route("/blocks", get(content::blocks))
        .route("/blog", get(content::blog))
}

/// Create all routes for admin.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", get(auth::login_page).post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/", get(dashboard::index))
        .nest("/products", product_routes())
        .route("/collections", get(catalog::collections))
        .route("/categories", get(catalog::categories))
        .route("/reviews", get(marketing::reviews))
        .route("/import-export", get(import_export::index))
        .route("/export/{dataset}", get(import_export::download))
        .route("/orders", get(orders::index))
        .route("/orders/{id}", get(orders::show))
        .route("/returns", get(fulfillment::returns))
        .route("/shipments", get(fulfillment::shipments))
        .route("/customers", get(customers::index))
        .route("/customers/{id}", get(customers::show))
        .route("/segments", get(marketing::segments))
        .route("/campaigns", get(marketing::campaigns))
        .nest("/content", content_routes())
        .route("/media", get(content::media))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_keep_repeats_and_decode() {
        let pairs = query_pairs(Some("q=amit+sharma&status=all&ids=1&ids=2"));
        assert_eq!(param(&pairs, "q"), "amit sharma");
        assert_eq!(param(&pairs, "status"), "all");
        assert_eq!(pairs.iter().filter(|(k, _)| k == "ids").count(), 2);
        assert_eq!(param(&pairs, "missing"), "");
        assert!(query_pairs(None).is_empty());
    }
}
