//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, RawQuery},
    response::{IntoResponse, Redirect, Response},
};
use graphphile_core::{
    AddOptions, Product, ProductQuery, ProductSort,
    catalog::{self, Color},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::{PageChrome, SessionCart, set_flash};
use crate::models::Flash;
use crate::seo::Seo;

/// Most related products shown under a product.
const RELATED_LIMIT: usize = 4;

/// One checkbox/radio in the listing sidebar.
#[derive(Debug, Clone)]
pub struct FacetOption {
    pub value: String,
    /// Swatch color for color facets.
    pub hex: Option<String>,
    pub selected: bool,
}

/// One entry in the sort menu.
#[derive(Debug, Clone)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub chrome: PageChrome,
    pub seo: Seo,
    pub products: Vec<&'static Product>,
    pub categories: Vec<FacetOption>,
    pub colors: Vec<FacetOption>,
    pub sizes: Vec<FacetOption>,
    pub sorts: Vec<SortOption>,
    pub has_filters: bool,
    pub total: usize,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub chrome: PageChrome,
    pub seo: Seo,
    pub product: &'static Product,
    pub related: Vec<&'static Product>,
}

/// Add to cart form data.
///
/// Fields arrive as strings so an empty `quantity` does not reject the form.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
}

impl AddToCartForm {
    /// Check the selection against `product` and build cart options.
    ///
    /// # Errors
    ///
    /// Returns the message to flash when a required choice is missing or
    /// names an option the product does not have.
    pub fn validate(self, product: &Product) -> std::result::Result<AddOptions, &'static str> {
        let color = non_empty(self.color);
        let size = non_empty(self.size);

        if !product.colors.is_empty() && !color.as_deref().is_some_and(|c| product.has_color(c)) {
            return Err("Please select a color");
        }
        if !product.sizes.is_empty() && !size.as_deref().is_some_and(|s| product.has_size(s)) {
            return Err("Please select a size");
        }

        Ok(AddOptions {
            size,
            color,
            quantity: self
                .quantity
                .as_deref()
                .and_then(|q| q.trim().parse::<i64>().ok()),
        })
    }
}

/// Quick add form posted from a product card.
#[derive(Debug, Default, Deserialize)]
pub struct QuickAddForm {
    /// Page to return to; only same-site paths are honoured.
    #[serde(default)]
    pub return_to: Option<String>,
}

impl QuickAddForm {
    /// Where to send the visitor after adding.
    #[must_use]
    pub fn destination(&self) -> &str {
        self.return_to
            .as_deref()
            .filter(|p| p.starts_with('/') && !p.starts_with("//") && !p.contains('\\'))
            .unwrap_or("/products")
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn facet<'a>(values: impl IntoIterator<Item = &'a str>, selected: &[String]) -> Vec<FacetOption> {
    values
        .into_iter()
        .map(|value| FacetOption {
            value: value.to_string(),
            hex: None,
            selected: selected.iter().any(|s| s == value),
        })
        .collect()
}

fn color_facet(colors: Vec<&Color>, selected: &[String]) -> Vec<FacetOption> {
    colors
        .into_iter()
        .map(|color| FacetOption {
            value: color.name.clone(),
            hex: Some(color.hex.clone()),
            selected: selected.iter().any(|s| *s == color.name),
        })
        .collect()
}

/// Products to show under `product`: same collection first, then other
/// featured products.
fn related_products(product: &Product) -> Vec<&'static Product> {
    let same_collection = catalog::products_by_collection(&product.collection);
    let featured = catalog::featured_products();

    same_collection
        .into_iter()
        .chain(featured)
        .filter(|p| p.id != product.id)
        .fold(Vec::new(), |mut acc: Vec<&'static Product>, p| {
            if acc.len() < RELATED_LIMIT && !acc.iter().any(|seen| seen.id == p.id) {
                acc.push(p);
            }
            acc
        })
}

/// Display product listing page.
#[instrument(skip(chrome))]
pub async fn index(chrome: PageChrome, RawQuery(raw): RawQuery) -> impl IntoResponse {
    let query = ProductQuery::from_pairs(
        url::form_urlencoded::parse(raw.as_deref().unwrap_or_default().as_bytes()),
    );
    let products = query.apply(catalog::products());

    let selected_category: Vec<String> = query.category.iter().cloned().collect();
    let sorts = ProductSort::ALL
        .into_iter()
        .map(|sort| SortOption {
            value: sort.as_str(),
            label: sort.label(),
            selected: sort == query.sort,
        })
        .collect();

    ProductsIndexTemplate {
        chrome,
        seo: Seo::new(
            "Shop All T-Shirts",
            "Browse every Graphphile design. Filter by category, color and size.",
        ),
        total: products.len(),
        products,
        categories: facet(catalog::categories(), &selected_category),
        colors: color_facet(catalog::all_colors(), &query.colors),
        sizes: facet(catalog::all_sizes(), &query.sizes),
        sorts,
        has_filters: query.has_filters(),
    }
}

/// Display product detail page.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown product ID.
#[instrument(skip(chrome))]
pub async fn show(chrome: PageChrome, Path(id): Path<String>) -> Result<impl IntoResponse> {
    let product =
        catalog::find_product(&id).ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(ProductShowTemplate {
        seo: Seo::new(&product.name, product.description.clone())
            .with_image(product.primary_image())
            .product(),
        related: related_products(product),
        product,
        chrome,
    })
}

/// Add a product variant to the cart.
///
/// Missing or unknown size/color selections flash an error and return to
/// the product page.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown product ID, or a session
/// error if the cart cannot be saved.
#[instrument(skip(session, cart, form))]
pub async fn add(
    session: Session,
    SessionCart(mut cart): SessionCart,
    Path(id): Path<String>,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let product =
        catalog::find_product(&id).ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    let back = format!("/product/{}", product.id);

    let options = match form.validate(product) {
        Ok(options) => options,
        Err(message) => {
            set_flash(&session, Flash::error(message)).await;
            return Ok(Redirect::to(&back).into_response());
        }
    };

    let item_id = cart.add_item(product, options).await?;
    add_breadcrumb("cart", "Added to cart", Some(&[("item_id", item_id.as_str())]));
    tracing::info!(item_id = %item_id, "Added to cart");

    set_flash(
        &session,
        Flash::success(format!("{} added to your cart", product.name)),
    )
    .await;

    Ok(Redirect::to(&back).into_response())
}

/// Add one of a product with its first size and color.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown product ID, or a session
/// error if the cart cannot be saved.
#[instrument(skip(session, cart, form))]
pub async fn quick_add(
    session: Session,
    SessionCart(mut cart): SessionCart,
    Path(id): Path<String>,
    Form(form): Form<QuickAddForm>,
) -> Result<Redirect> {
    let product =
        catalog::find_product(&id).ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let item_id = cart.add_item(product, AddOptions::default()).await?;
    add_breadcrumb("cart", "Quick add", Some(&[("item_id", item_id.as_str())]));
    tracing::info!(item_id = %item_id, "Added to cart from listing");

    set_flash(
        &session,
        Flash::success(format!("{} added to your cart", product.name)),
    )
    .await;

    Ok(Redirect::to(form.destination()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(size: Option<&str>, color: Option<&str>, quantity: Option<&str>) -> AddToCartForm {
        AddToCartForm {
            size: size.map(str::to_string),
            color: color.map(str::to_string),
            quantity: quantity.map(str::to_string),
        }
    }

    #[test]
    fn test_validate_requires_color_then_size() {
        let product = catalog::find_product("1").unwrap();

        assert_eq!(
            form(Some("M"), None, None).validate(product).unwrap_err(),
            "Please select a color"
        );
        assert_eq!(
            form(None, Some("Black"), None).validate(product).unwrap_err(),
            "Please select a size"
        );
        assert_eq!(
            form(Some("XXL"), Some("Black"), None)
                .validate(product)
                .unwrap_err(),
            "Please select a size"
        );
        assert_eq!(
            form(Some(" "), Some("Black"), None)
                .validate(product)
                .unwrap_err(),
            "Please select a size"
        );
    }

    #[test]
    fn test_validate_builds_options() {
        let product = catalog::find_product("1").unwrap();
        let options = form(Some("M"), Some("Black"), Some("2"))
            .validate(product)
            .unwrap();
        assert_eq!(options.size.as_deref(), Some("M"));
        assert_eq!(options.color.as_deref(), Some("Black"));
        assert_eq!(options.quantity, Some(2));

        let options = form(Some("M"), Some("Black"), Some(""))
            .validate(product)
            .unwrap();
        assert_eq!(options.quantity, None);
    }

    #[test]
    fn test_quick_add_destination_stays_on_site() {
        let dest = |to: Option<&str>| {
            QuickAddForm {
                return_to: to.map(str::to_string),
            }
            .destination()
            .to_string()
        };

        assert_eq!(dest(None), "/products");
        assert_eq!(dest(Some("/collections/minimal-geometry")), "/collections/minimal-geometry");
        assert_eq!(dest(Some("//evil.example")), "/products");
        assert_eq!(dest(Some("https://evil.example")), "/products");
        assert_eq!(dest(Some("/\\evil.example")), "/products");
    }

    #[test]
    fn test_related_products_excludes_self_and_caps() {
        let product = catalog::find_product("5").unwrap();
        let related = related_products(product);
        assert!(related.len() <= RELATED_LIMIT);
        assert!(related.iter().all(|p| p.id != "5"));
        assert_eq!(related.first().map(|p| p.id.as_str()), Some("1"));
    }
}
