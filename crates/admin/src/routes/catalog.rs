//! Collections and categories pages.

use askama::Template;
use axum::response::Html;
use tracing::instrument;

use crate::data::inventory::{self, CategoryCount, CollectionCount};
use crate::filters;
use crate::middleware::AdminPage;

use super::render;

#[derive(Template)]
#[template(path = "catalog/collections.html")]
pub struct CollectionsTemplate {
    pub page: AdminPage,
    pub collections: Vec<CollectionCount>,
}

#[derive(Template)]
#[template(path = "catalog/categories.html")]
pub struct CategoriesTemplate {
    pub page: AdminPage,
    pub categories: Vec<CategoryCount>,
}

/// Collections page handler.
#[instrument(skip(page))]
pub async fn collections(page: AdminPage) -> Html<String> {
    render(&CollectionsTemplate {
        page,
        collections: inventory::collection_counts(),
    })
}

/// Categories page handler.
#[instrument(skip(page))]
pub async fn categories(page: AdminPage) -> Html<String> {
    render(&CategoriesTemplate {
        page,
        categories: inventory::category_counts(),
    })
}
