//! Shopping cart state container.
//!
//! A [`Cart`] is an ordered list of [`CartItem`]s, newest first. Each item is
//! one product variant (product + size + color); adding the same variant again
//! increases its quantity instead of creating a second line.
//!
//! Persistence goes through the [`CartStore`] trait. The whole list is written
//! as a JSON array after every change and read back once when a
//! [`PersistentCart`] is opened. Missing or unreadable data yields an empty cart.

use std::convert::Infallible;
use std::future::Future;
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::Price;

/// Fixed key the serialized cart is stored under.
pub const CART_STORAGE_KEY: &str = "graphphile_cart_v1";

/// Placeholder used in item ids when a variant has no size or color.
const NO_OPTION: &str = "na";

/// One product variant in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// `{productId}-{size}-{color}`, with `na` for a missing option.
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub price: Price,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Build the identifier for a product variant.
    #[must_use]
    pub fn variant_id(product_id: &str, size: Option<&str>, color: Option<&str>) -> String {
        format!(
            "{product_id}-{}-{}",
            size.unwrap_or(NO_OPTION),
            color.unwrap_or(NO_OPTION)
        )
    }

    /// Price × quantity.
    #[must_use]
    pub const fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }

    fn is_variant(&self, product_id: &str, size: Option<&str>, color: Option<&str>) -> bool {
        self.product_id == product_id && self.size.as_deref() == size && self.color.as_deref() == color
    }
}

/// Options for [`Cart::add_item`].
///
/// Unset size or color falls back to the product's first option; an unset
/// quantity means 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOptions {
    pub size: Option<String>,
    pub color: Option<String>,
    pub quantity: Option<i64>,
}

/// Clamp a requested quantity into `1..=u32::MAX`.
#[must_use]
pub fn clamp_quantity(requested: i64) -> u32 {
    u32::try_from(requested.max(1)).unwrap_or(u32::MAX)
}

/// The cart contents.
///
/// Serializes as a bare JSON array of items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Items, newest first.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find an item by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Add a product variant, merging with an existing line for the same variant.
    ///
    /// New lines are placed at the front. Returns the id of the affected line.
    pub fn add_item(&mut self, product: &Product, options: AddOptions) -> String {
        let size = options.size.or_else(|| product.sizes.first().cloned());
        let color = options
            .color
            .or_else(|| product.colors.first().map(|c| c.name.clone()));
        let quantity = clamp_quantity(options.quantity.unwrap_or(1));

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.is_variant(&product.id, size.as_deref(), color.as_deref()))
        {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return existing.id.clone();
        }

        let id = CartItem::variant_id(&product.id, size.as_deref(), color.as_deref());
        self.items.insert(
            0,
            CartItem {
                id: id.clone(),
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                image: product.primary_image().to_string(),
                size,
                color,
                quantity,
            },
        );
        id
    }

    /// Remove the line with `id`. Unknown ids are ignored.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    /// Set the quantity of the line with `id`, never below 1. Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = clamp_quantity(quantity);
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of price × quantity.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Serialize the item list as a JSON array.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.items).unwrap_or_else(|_| "[]".to_string())
    }

    /// Rebuild a cart from its serialized form.
    ///
    /// `None` and unreadable input both give an empty cart. Stored quantities
    /// of zero are raised to 1.
    #[must_use]
    pub fn restore(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::new();
        };

        match serde_json::from_str::<Vec<CartItem>>(raw) {
            Ok(mut items) => {
                for item in &mut items {
                    item.quantity = item.quantity.max(1);
                }
                Self { items }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable saved cart");
                Self::new()
            }
        }
    }
}

// =============================================================================
// Persistence
// =============================================================================

/// Where a serialized cart lives between requests.
///
/// Implementations store the raw JSON produced by [`Cart::to_json`] under
/// [`CART_STORAGE_KEY`].
pub trait CartStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the raw serialized cart, if any.
    fn load(&self) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send;

    /// Replace the stored cart.
    fn save(&self, raw: &str) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// In-process cart store, used by tools and tests.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    raw: Mutex<Option<String>>,
}

impl MemoryCartStore {
    /// A store that already holds `raw`.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    /// The currently stored raw value.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.raw
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl CartStore for MemoryCartStore {
    type Error = Infallible;

    async fn load(&self) -> Result<Option<String>, Self::Error> {
        Ok(self.raw())
    }

    async fn save(&self, raw: &str) -> Result<(), Self::Error> {
        *self.raw.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw.to_string());
        Ok(())
    }
}

/// A cart bound to a [`CartStore`].
///
/// Loaded once on [`open`](Self::open); every mutating call writes the full
/// list back before returning.
#[derive(Debug)]
pub struct PersistentCart<S> {
    cart: Cart,
    store: S,
}

impl<S: CartStore> PersistentCart<S> {
    /// Load the cart from `store`. Load failures give an empty cart.
    pub async fn open(store: S) -> Self {
        let raw = match store.load().await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load saved cart");
                None
            }
        };

        Self {
            cart: Cart::restore(raw.as_deref()),
            store,
        }
    }

    /// The in-memory cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// See [`Cart::add_item`].
    ///
    /// # Errors
    ///
    /// Returns the store's error if the updated cart cannot be saved.
    pub async fn add_item(
        &mut self,
        product: &Product,
        options: AddOptions,
    ) -> Result<String, S::Error> {
        let id = self.cart.add_item(product, options);
        self.persist().await?;
        Ok(id)
    }

    /// See [`Cart::remove_item`].
    ///
    /// # Errors
    ///
    /// Returns the store's error if the updated cart cannot be saved.
    pub async fn remove_item(&mut self, id: &str) -> Result<(), S::Error> {
        self.cart.remove_item(id);
        self.persist().await
    }

    /// See [`Cart::update_quantity`].
    ///
    /// # Errors
    ///
    /// Returns the store's error if the updated cart cannot be saved.
    pub async fn update_quantity(&mut self, id: &str, quantity: i64) -> Result<(), S::Error> {
        self.cart.update_quantity(id, quantity);
        self.persist().await
    }

    /// See [`Cart::clear`]. The stored copy is emptied too.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the empty cart cannot be saved.
    pub async fn clear(&mut self) -> Result<(), S::Error> {
        self.cart.clear();
        self.persist().await
    }

    /// Release the store and return the cart.
    #[must_use]
    pub fn into_cart(self) -> Cart {
        self.cart
    }

    async fn persist(&self) -> Result<(), S::Error> {
        self.store.save(&self.cart.to_json()).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::find_product;

    fn product(id: &str) -> &'static Product {
        find_product(id).unwrap()
    }

    fn variant(size: &str, color: &str, quantity: i64) -> AddOptions {
        AddOptions {
            size: Some(size.to_string()),
            color: Some(color.to_string()),
            quantity: Some(quantity),
        }
    }

    #[test]
    fn test_adding_same_variant_twice_merges() {
        let mut cart = Cart::new();
        cart.add_item(product("1"), variant("M", "Black", 1));
        let id = cart.add_item(product("1"), variant("M", "Black", 2));

        assert_eq!(cart.items().len(), 1);
        let item = cart.get(&id).unwrap();
        assert_eq!(item.id, "1-M-Black");
        assert_eq!(item.quantity, 3);
        assert_eq!(item.line_total(), Price::new(4497));
    }

    #[test]
    fn test_different_variants_are_separate_and_newest_first() {
        let mut cart = Cart::new();
        cart.add_item(product("1"), variant("M", "Black", 1));
        cart.add_item(product("1"), variant("L", "Black", 1));
        cart.add_item(product("2"), AddOptions::default());

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["2-S-Blue", "1-L-Black", "1-M-Black"]);
    }

    #[test]
    fn test_defaults_use_first_size_and_color() {
        let mut cart = Cart::new();
        let id = cart.add_item(product("3"), AddOptions::default());

        let item = cart.get(&id).unwrap();
        assert_eq!(item.size.as_deref(), Some("XS"));
        assert_eq!(item.color.as_deref(), Some("Black"));
        assert_eq!(item.quantity, 1);
        assert_eq!(item.image, product("3").primary_image());
    }

    #[test]
    fn test_add_clamps_quantity_to_one() {
        let mut cart = Cart::new();
        let id = cart.add_item(product("1"), variant("S", "White", -5));
        assert_eq!(cart.get(&id).unwrap().quantity, 1);

        cart.add_item(product("1"), variant("S", "White", 0));
        assert_eq!(cart.get(&id).unwrap().quantity, 2);
    }

    #[test]
    fn test_variant_without_options_uses_placeholder() {
        let mut bare = product("6").clone();
        bare.sizes.clear();
        bare.colors.clear();

        let mut cart = Cart::new();
        let id = cart.add_item(&bare, AddOptions::default());
        assert_eq!(id, "6-na-na");
        assert_eq!(cart.get(&id).unwrap().size, None);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(product("1"), variant("M", "Black", 1));
        let before = cart.clone();

        cart.remove_item("does-not-exist");
        assert_eq!(cart, before);

        cart.remove_item("1-M-Black");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_never_below_one() {
        let mut cart = Cart::new();
        let id = cart.add_item(product("4"), variant("L", "Charcoal", 2));

        cart.update_quantity(&id, 0);
        assert_eq!(cart.get(&id).unwrap().quantity, 1);

        cart.update_quantity(&id, -3);
        assert_eq!(cart.get(&id).unwrap().quantity, 1);

        cart.update_quantity(&id, 7);
        assert_eq!(cart.get(&id).unwrap().quantity, 7);

        let before = cart.clone();
        cart.update_quantity("missing", 9);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add_item(product("1"), variant("M", "Black", 2)); // 2 × 1499
        cart.add_item(product("3"), variant("S", "White", 1)); // 1 × 1299
        cart.add_item(product("4"), variant("XL", "Charcoal", 3)); // 3 × 1899

        assert_eq!(cart.total_items(), 6);
        assert_eq!(cart.subtotal(), Price::new(2 * 1499 + 1299 + 3 * 1899));
        let by_lines: Price = cart.items().iter().map(CartItem::line_total).sum();
        assert_eq!(cart.subtotal(), by_lines);

        cart.clear();
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.subtotal(), Price::ZERO);
    }

    #[test]
    fn test_json_schema() {
        let mut cart = Cart::new();
        cart.add_item(product("1"), variant("M", "Black", 1));

        let value: serde_json::Value = serde_json::from_str(&cart.to_json()).unwrap();
        let first = value.as_array().and_then(|a| a.first()).unwrap();
        assert_eq!(first["id"], "1-M-Black");
        assert_eq!(first["productId"], "1");
        assert_eq!(first["price"], 1499);
        assert_eq!(first["quantity"], 1);
    }

    #[test]
    fn test_restore_handles_missing_and_corrupt_data() {
        assert!(Cart::restore(None).is_empty());
        assert!(Cart::restore(Some("{not json")).is_empty());
        assert!(Cart::restore(Some(r#"{"id":"x"}"#)).is_empty());

        let raw = r#"[{"id":"1-M-Black","productId":"1","name":"Geometric Harmony","price":1499,"image":"","size":"M","color":"Black","quantity":0}]"#;
        let cart = Cart::restore(Some(raw));
        assert_eq!(cart.total_items(), 1);
    }

    #[tokio::test]
    async fn test_persistent_cart_writes_every_change() {
        let mut cart = PersistentCart::open(MemoryCartStore::default()).await;
        cart.add_item(product("1"), variant("M", "Black", 1))
            .await
            .unwrap();
        cart.add_item(product("1"), variant("M", "Black", 2))
            .await
            .unwrap();

        let saved = Cart::restore(cart.store.raw().as_deref());
        assert_eq!(&saved, cart.cart());
        assert_eq!(saved.get("1-M-Black").unwrap().quantity, 3);
    }

    #[tokio::test]
    async fn test_persistent_cart_reopens_saved_state() {
        let mut first = PersistentCart::open(MemoryCartStore::default()).await;
        first
            .add_item(product("2"), variant("XL", "Cream", 2))
            .await
            .unwrap();
        let raw = first.store.raw().unwrap();

        let reopened = PersistentCart::open(MemoryCartStore::with_raw(raw)).await;
        assert_eq!(reopened.cart().total_items(), 2);
        assert_eq!(reopened.cart().subtotal(), Price::new(3398));
    }

    #[tokio::test]
    async fn test_clear_empties_memory_and_store() {
        let mut cart = PersistentCart::open(MemoryCartStore::default()).await;
        cart.add_item(product("5"), AddOptions::default())
            .await
            .unwrap();
        cart.clear().await.unwrap();

        assert!(cart.cart().is_empty());
        assert_eq!(cart.store.raw().as_deref(), Some("[]"));
        assert!(Cart::restore(cart.store.raw().as_deref()).is_empty());
    }

    #[tokio::test]
    async fn test_open_with_corrupt_store_is_empty() {
        let cart = PersistentCart::open(MemoryCartStore::with_raw("][")).await;
        assert!(cart.cart().is_empty());
    }
}
