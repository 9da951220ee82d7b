//! Search route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Query, response::IntoResponse};
use graphphile_core::{Product, catalog};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::middleware::PageChrome;
use crate::seo::Seo;

/// Search query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Search results page template.
#[derive(Template, WebTemplate)]
#[template(path = "search.html")]
pub struct SearchTemplate {
    pub chrome: PageChrome,
    pub seo: Seo,
    pub query: String,
    pub results: Vec<&'static Product>,
}

impl SearchTemplate {
    /// Whether a query was entered (an empty box shows no "no results" text).
    #[must_use]
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }
}

/// Display search results.
#[instrument(skip(chrome))]
pub async fn search(chrome: PageChrome, Query(params): Query<SearchQuery>) -> impl IntoResponse {
    let query = params.q.trim().to_string();
    let results = catalog::search(&query);
    tracing::debug!(results = results.len(), "Search completed");

    let seo = if query.is_empty() {
        Seo::new("Search", "Search Graphphile designs.")
    } else {
        Seo::new(&format!("Search: {query}"), "Search Graphphile designs.").noindex()
    };

    SearchTemplate {
        chrome,
        seo,
        query,
        results,
    }
}
