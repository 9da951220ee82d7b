//! Product list, add/edit form and bulk actions.
//!
//! Nothing is persisted: a valid submission only flashes the outcome and
//! returns to the list.

use askama::Template;
use axum::{
    extract::{Path, RawQuery},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use graphphile_core::{Product, catalog};
use tower_sessions::Session;
use tracing::instrument;

use crate::components::{
    BulkAction, Cell, DataTable, DataTableConfig, FilterOption, TableColumn, TableFilter,
    TableRow, Tone,
};
use crate::data::inventory::{self, ListingStatus};
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::{AdminPage, RequireAdminAuth, set_flash};
use crate::models::Flash;

use super::{ListTemplate, PageAction, param, query_pairs, render};

/// Sizes offered on the form.
pub const AVAILABLE_SIZES: [&str; 6] = ["XS", "S", "M", "L", "XL", "XXL"];

/// Colors offered on the form, as `(name, hex)`.
pub const AVAILABLE_COLORS: [(&str, &str); 11] = [
    ("White", "#FFFFFF"),
    ("Black", "#000000"),
    ("Gray", "#808080"),
    ("Blue", "#1E3A8A"),
    ("Red", "#B91C1C"),
    ("Green", "#047857"),
    ("Yellow", "#F59E0B"),
    ("Purple", "#7E22CE"),
    ("Pink", "#DB2777"),
    ("Cream", "#F5F5DC"),
    ("Navy", "#000080"),
];

fn table_config() -> DataTableConfig {
    let mut categories = vec![FilterOption::new("all", "All Categories")];
    categories.extend(
        catalog::categories()
            .into_iter()
            .map(|c| FilterOption::new(c, c)),
    );

    DataTableConfig::new("products")
        .column(TableColumn::sortable("name", "Product"))
        .column(TableColumn::sortable("category", "Category"))
        .column(TableColumn::sortable("price", "Price"))
        .column(TableColumn::sortable("stock", "Inventory"))
        .column(TableColumn::sortable("status", "Status"))
        .column(TableColumn::new("collection", "Collection").visible(false))
        .filter(TableFilter::select("category", "Category", categories))
        .bulk_action("/products/bulk", BulkAction::new("delete", "Delete").destructive())
        .search_placeholder("Search products...")
        .empty_state("No products found", Some("Try adjusting your search or filter"))
}

/// Product list page handler.
#[instrument(skip(page))]
pub async fn index(page: AdminPage, RawQuery(query): RawQuery) -> Html<String> {
    let pairs = query_pairs(query.as_deref());
    let category = Some(param(&pairs, "category")).filter(|c| !c.is_empty() && *c != "all");

    let rows = inventory::product_rows(&mut rand::rng(), param(&pairs, "q"), category)
        .into_iter()
        .map(|row| {
            let p = row.product;
            let mut stock = Cell::number(row.stock);
            if row.is_low_stock() {
                stock.tone = Some(Tone::Danger);
                stock = stock.with_detail("low stock");
            } else {
                stock = stock.with_detail("in stock");
            }
            let status_tone = match row.status {
                ListingStatus::Active => Tone::Success,
                ListingStatus::Draft => Tone::Neutral,
            };
            TableRow::new(
                p.id.clone(),
                vec![
                    Cell::text(p.name.clone()).with_detail(format!("ID: {}", p.id)),
                    Cell::text(p.category.clone()),
                    Cell::price(p.price),
                    stock,
                    Cell::badge(row.status.label(), status_tone),
                    Cell::text(p.collection.clone()),
                ],
            )
            .link(format!("/products/{}/edit", p.id))
        })
        .collect();

    let table = DataTable::new(table_config(), rows, pairs);
    render(
        &ListTemplate::new(page, "Products", table)
            .action(PageAction::new("/products/new", "Add Product")),
    )
}

/// Form state for adding or editing a product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    /// Set when editing an existing product.
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    /// Rupee price as typed.
    pub price: String,
    pub category: String,
    pub collection: String,
    pub featured: bool,
    pub images: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub meta_title: String,
    pub meta_description: String,
    pub slug: String,
}

/// What the submit button asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormIntent {
    Save,
    AddImage,
    RemoveImage(usize),
}

impl FormIntent {
    fn parse(value: &str) -> Self {
        match value {
            "add_image" => Self::AddImage,
            other => other
                .strip_prefix("remove_image:")
                .and_then(|i| i.parse().ok())
                .map_or(Self::Save, Self::RemoveImage),
        }
    }
}

impl ProductForm {
    /// Empty form with one image field.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            images: vec![String::new()],
            ..Self::default()
        }
    }

    /// Form prefilled from a catalog product.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id.clone()),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.amount().to_string(),
            category: product.category.clone(),
            collection: product.collection.clone(),
            featured: product.featured,
            images: product.images.clone(),
            sizes: product.sizes.clone(),
            colors: product.colors.iter().map(|c| c.name.clone()).collect(),
            ..Self::default()
        }
    }

    /// Read the form and its submit intent from decoded body pairs.
    /// Repeated `images`, `sizes` and `colors` keys keep their order.
    pub fn from_pairs<I, K, V>(pairs: I) -> (Self, FormIntent)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut form = Self::default();
        let mut intent = FormIntent::Save;
        for (key, value) in pairs {
            let value = value.as_ref().to_string();
            match key.as_ref() {
                "id" if !value.is_empty() => form.id = Some(value),
                "name" => form.name = value,
                "description" => form.description = value,
                "price" => form.price = value,
                "category" => form.category = value,
                "collection" => form.collection = value,
                "featured" => form.featured = true,
                "images" => form.images.push(value),
                "sizes" => form.sizes.push(value),
                "colors" => form.colors.push(value),
                "meta_title" => form.meta_title = value,
                "meta_description" => form.meta_description = value,
                "slug" => form.slug = value,
                "intent" => intent = FormIntent::parse(&value),
                _ => {}
            }
        }
        (form, intent)
    }

    #[must_use]
    pub const fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Parsed price; anything unparsable or not finite counts as missing.
    fn price_value(&self) -> f64 {
        self.price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .unwrap_or(0.0)
    }

    /// Check the form, returning the first problem found.
    ///
    /// # Errors
    ///
    /// Returns the message to show the user.
    pub fn validate(&self) -> std::result::Result<(), &'static str> {
        if self.name.trim().is_empty()
            || self.description.trim().is_empty()
            || self.price_value() <= 0.0
        {
            return Err("Please fill out all required fields");
        }
        if self.images.iter().any(|i| i.trim().is_empty()) {
            return Err("Please provide URLs for all images or remove empty fields");
        }
        if self.sizes.is_empty() {
            return Err("Please select at least one size");
        }
        if self.colors.is_empty() {
            return Err("Please select at least one color");
        }
        Ok(())
    }

    /// Apply an image add/remove intent.
    pub fn apply(&mut self, intent: FormIntent) {
        match intent {
            FormIntent::AddImage => self.images.push(String::new()),
            FormIntent::RemoveImage(index) if index < self.images.len() => {
                self.images.remove(index);
            }
            FormIntent::RemoveImage(_) | FormIntent::Save => {}
        }
    }

    #[must_use]
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    #[must_use]
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Flash text for a successful save.
    #[must_use]
    pub fn success_message(&self) -> String {
        let verb = if self.is_edit() { "updated" } else { "created" };
        format!("{} has been {verb} successfully.", self.name.trim())
    }
}

/// Add/edit product page template.
#[derive(Template)]
#[template(path = "products/form.html")]
pub struct ProductFormTemplate {
    pub page: AdminPage,
    pub form: ProductForm,
    pub error: Option<String>,
    pub sizes: &'static [&'static str],
    pub colors: &'static [(&'static str, &'static str)],
    pub categories: Vec<&'static str>,
    pub collections: Vec<&'static str>,
}

impl ProductFormTemplate {
    fn new(page: AdminPage, form: ProductForm, error: Option<String>) -> Self {
        Self {
            page,
            form,
            error,
            sizes: &AVAILABLE_SIZES,
            colors: &AVAILABLE_COLORS,
            categories: catalog::categories(),
            collections: catalog::collections()
                .iter()
                .map(|c| c.name.as_str())
                .collect(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        if self.form.is_edit() {
            "Edit Product"
        } else {
            "Add New Product"
        }
    }
}

/// Add product page handler.
#[instrument(skip(page))]
pub async fn new_product(page: AdminPage) -> Html<String> {
    render(&ProductFormTemplate::new(page, ProductForm::blank(), None))
}

/// Edit product page handler.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown product.
#[instrument(skip(page))]
pub async fn edit(page: AdminPage, Path(id): Path<String>) -> Result<Html<String>> {
    let product =
        catalog::find_product(&id).ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    Ok(render(&ProductFormTemplate::new(
        page,
        ProductForm::from_product(product),
        None,
    )))
}

/// Handle the product form.
///
/// Image add/remove buttons re-render the form. A save that fails validation
/// re-renders with the message; a valid save flashes and returns to the list.
#[instrument(skip(page, session, body))]
pub async fn save(page: AdminPage, session: Session, body: String) -> Response {
    let (mut form, intent) = ProductForm::from_pairs(url::form_urlencoded::parse(body.as_bytes()));

    if intent != FormIntent::Save {
        form.apply(intent);
        return render(&ProductFormTemplate::new(page, form, None)).into_response();
    }

    if let Err(message) = form.validate() {
        tracing::debug!(reason = message, "Product form rejected");
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            render(&ProductFormTemplate::new(
                page,
                form,
                Some(message.to_string()),
            )),
        )
            .into_response();
    }

    tracing::info!(name = %form.name, edit = form.is_edit(), "Product saved");
    set_flash(&session, Flash::success(form.success_message())).await;
    Redirect::to("/products").into_response()
}

/// Bulk action on the selected products.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for an unknown action.
#[instrument(skip(_admin, session, body))]
pub async fn bulk(
    RequireAdminAuth(_admin): RequireAdminAuth,
    session: Session,
    body: String,
) -> Result<Redirect> {
    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect();
    let ids: Vec<&str> = pairs
        .iter()
        .filter(|(k, _)| k == "ids")
        .map(|(_, v)| v.as_str())
        .collect();

    match param(&pairs, "action") {
        "delete" => {
            let flash = if ids.is_empty() {
                Flash::info("No products selected")
            } else {
                Flash::success(format!("{} products deleted", ids.len()))
            };
            tracing::info!(count = ids.len(), "Bulk delete requested");
            set_flash(&session, flash).await;
            Ok(Redirect::to("/products"))
        }
        other => Err(AppError::BadRequest(format!("unknown bulk action: {other}"))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid() -> ProductForm {
        ProductForm {
            name: "Orbit Tee".to_string(),
            description: "Soft cotton".to_string(),
            price: "1499".to_string(),
            images: vec!["https://img.example/1.jpg".to_string()],
            sizes: vec!["M".to_string()],
            colors: vec!["Black".to_string()],
            ..ProductForm::default()
        }
    }

    #[test]
    fn test_validation_order() {
        assert_eq!(valid().validate(), Ok(()));

        let form = ProductForm {
            price: "0".to_string(),
            ..valid()
        };
        assert_eq!(form.validate(), Err("Please fill out all required fields"));

        let form = ProductForm {
            images: vec!["https://img.example/1.jpg".to_string(), String::new()],
            sizes: vec![],
            ..valid()
        };
        assert_eq!(
            form.validate(),
            Err("Please provide URLs for all images or remove empty fields")
        );

        let form = ProductForm {
            sizes: vec![],
            colors: vec![],
            ..valid()
        };
        assert_eq!(form.validate(), Err("Please select at least one size"));

        let form = ProductForm {
            colors: vec![],
            ..valid()
        };
        assert_eq!(form.validate(), Err("Please select at least one color"));
    }

    #[test]
    fn test_non_numeric_price_is_missing() {
        for price in ["abc", "NaN", "inf", "-inf", "infinity"] {
            let form = ProductForm {
                price: price.to_string(),
                ..valid()
            };
            assert_eq!(
                form.validate(),
                Err("Please fill out all required fields"),
                "{price}"
            );
        }
    }

    #[test]
    fn test_from_pairs_collects_repeats_and_intent() {
        let (form, intent) = ProductForm::from_pairs([
            ("id", "3"),
            ("name", "Line Art"),
            ("sizes", "S"),
            ("sizes", "XL"),
            ("colors", "Navy"),
            ("images", "a"),
            ("images", ""),
            ("featured", "on"),
            ("intent", "remove_image:1"),
        ]);
        assert_eq!(form.id.as_deref(), Some("3"));
        assert_eq!(form.sizes, vec!["S", "XL"]);
        assert!(form.has_color("Navy"));
        assert!(form.featured);
        assert_eq!(intent, FormIntent::RemoveImage(1));

        let (_, intent) = ProductForm::from_pairs([("intent", "save")]);
        assert_eq!(intent, FormIntent::Save);
    }

    #[test]
    fn test_image_intents() {
        let mut form = ProductForm::blank();
        form.apply(FormIntent::AddImage);
        assert_eq!(form.images.len(), 2);
        form.apply(FormIntent::RemoveImage(5));
        assert_eq!(form.images.len(), 2);
        form.apply(FormIntent::RemoveImage(0));
        assert_eq!(form.images.len(), 1);
    }

    #[test]
    fn test_prefill_and_messages() {
        let product = catalog::find_product("1").unwrap();
        let form = ProductForm::from_product(product);
        assert_eq!(form.price, product.price.amount().to_string());
        assert_eq!(
            form.success_message(),
            format!("{} has been updated successfully.", product.name)
        );
        assert_eq!(
            valid().success_message(),
            "Orbit Tee has been created successfully."
        );
    }
}
