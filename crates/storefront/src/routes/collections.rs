//! Collection route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Path, response::IntoResponse};
use graphphile_core::{Collection, Product, catalog};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::PageChrome;
use crate::seo::Seo;

/// A collection with its product count, for the listing.
#[derive(Debug, Clone)]
pub struct CollectionSummary {
    pub collection: &'static Collection,
    pub product_count: usize,
}

/// Collection listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "collections/index.html")]
pub struct CollectionsIndexTemplate {
    pub chrome: PageChrome,
    pub seo: Seo,
    pub collections: Vec<CollectionSummary>,
}

/// Collection detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "collections/show.html")]
pub struct CollectionShowTemplate {
    pub chrome: PageChrome,
    pub seo: Seo,
    pub collection: &'static Collection,
    pub products: Vec<&'static Product>,
}

/// Display collection listing page.
#[instrument(skip(chrome))]
pub async fn index(chrome: PageChrome) -> impl IntoResponse {
    let collections = catalog::collections()
        .iter()
        .map(|collection| CollectionSummary {
            collection,
            product_count: catalog::products_by_collection(&collection.name).len(),
        })
        .collect();

    CollectionsIndexTemplate {
        chrome,
        seo: Seo::new(
            "Collections",
            "Explore Graphphile's curated collections of graphic t-shirts.",
        ),
        collections,
    }
}

/// Display collection detail page.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown slug.
#[instrument(skip(chrome))]
pub async fn show(chrome: PageChrome, Path(slug): Path<String>) -> Result<impl IntoResponse> {
    let collection = catalog::find_collection(&slug)
        .ok_or_else(|| AppError::NotFound(format!("collection {slug}")))?;

    Ok(CollectionShowTemplate {
        seo: Seo::new(&collection.name, collection.description.clone())
            .with_image(collection.image.clone()),
        products: catalog::products_by_collection(&collection.name),
        collection,
        chrome,
    })
}
