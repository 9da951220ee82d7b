//! Dashboard route handler.

use askama::Template;
use axum::response::Html;
use tracing::instrument;

use crate::data::inventory::{self, DASHBOARD_STATS, DashboardProduct, DashboardStats};
use crate::filters;
use crate::middleware::AdminPage;

use super::render;

/// Dashboard page template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub page: AdminPage,
    pub stats: DashboardStats,
    pub system_status: &'static str,
    pub products: Vec<DashboardProduct>,
}

/// Dashboard page handler.
#[instrument(skip(page))]
pub async fn index(page: AdminPage) -> Html<String> {
    let products = inventory::dashboard_products(&mut rand::rng());

    render(&DashboardTemplate {
        page,
        stats: DASHBOARD_STATS,
        system_status: inventory::SYSTEM_STATUS,
        products,
    })
}
