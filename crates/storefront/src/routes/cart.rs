//! Cart route handlers.
//!
//! The cart lives in the visitor's session. Every change is written back
//! before the handler redirects to `/cart`, so a reload shows the saved state.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{IntoResponse, Redirect},
};
use graphphile_core::{CartItem, Price};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::{PageChrome, SessionCart, set_flash};
use crate::models::Flash;
use crate::seo::Seo;

/// Shown in place of a checkout button.
pub const CHECKOUT_NOTICE: &str =
    "This is a showcase site. Checkout is not available and no orders are placed.";

/// Cart line display data for templates.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub item: CartItem,
    /// Quantity submitted by the "−" button.
    pub decrement: i64,
    /// Quantity submitted by the "+" button.
    pub increment: i64,
}

impl From<&CartItem> for CartLineView {
    fn from(item: &CartItem) -> Self {
        let quantity = i64::from(item.quantity);
        Self {
            item: item.clone(),
            decrement: quantity - 1,
            increment: quantity + 1,
        }
    }
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub chrome: PageChrome,
    pub seo: Seo,
    pub lines: Vec<CartLineView>,
    pub subtotal: Price,
    pub total_items: u64,
    pub notice: &'static str,
}

/// Cart count badge fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub cart_count: u64,
}

/// Update quantity form data.
///
/// `quantity` arrives as a string so it can be parsed as a signed number;
/// anything below 1 is stored as 1.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub id: String,
    pub quantity: String,
}

/// Remove item form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: String,
}

/// Display cart page.
#[instrument(skip(chrome, cart))]
pub async fn show(chrome: PageChrome, SessionCart(cart): SessionCart) -> impl IntoResponse {
    let cart = cart.into_cart();

    CartShowTemplate {
        chrome,
        seo: Seo::new("Your Cart", "Review the designs in your cart.").noindex(),
        lines: cart.items().iter().map(CartLineView::from).collect(),
        subtotal: cart.subtotal(),
        total_items: cart.total_items(),
        notice: CHECKOUT_NOTICE,
    }
}

/// Set an item's quantity.
///
/// # Errors
///
/// Returns `AppError::BadRequest` if the quantity is not a whole number, or a
/// session error if the cart cannot be saved.
#[instrument(skip(cart))]
pub async fn update(
    SessionCart(mut cart): SessionCart,
    Form(form): Form<UpdateCartForm>,
) -> Result<Redirect> {
    let quantity: i64 = form
        .quantity
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid quantity: {}", form.quantity)))?;

    cart.update_quantity(&form.id, quantity).await?;
    tracing::debug!(item_id = %form.id, quantity, "Cart quantity updated");

    Ok(Redirect::to("/cart"))
}

/// Remove an item from the cart.
///
/// # Errors
///
/// Returns a session error if the cart cannot be saved.
#[instrument(skip(session, cart))]
pub async fn remove(
    session: Session,
    SessionCart(mut cart): SessionCart,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Redirect> {
    let name = cart.cart().get(&form.id).map(|item| item.name.clone());
    cart.remove_item(&form.id).await?;

    if let Some(name) = name {
        add_breadcrumb("cart", "Removed from cart", Some(&[("item_id", form.id.as_str())]));
        set_flash(&session, Flash::info(format!("{name} removed from your cart"))).await;
    }

    Ok(Redirect::to("/cart"))
}

/// Empty the cart.
///
/// # Errors
///
/// Returns a session error if the cart cannot be saved.
#[instrument(skip(session, cart))]
pub async fn clear(session: Session, SessionCart(mut cart): SessionCart) -> Result<Redirect> {
    cart.clear().await?;
    add_breadcrumb("cart", "Cart cleared", None);
    set_flash(&session, Flash::info("Your cart is empty")).await;

    Ok(Redirect::to("/cart"))
}

/// Cart count badge (fragment).
#[instrument(skip(cart))]
pub async fn count(SessionCart(cart): SessionCart) -> impl IntoResponse {
    CartCountTemplate {
        cart_count: cart.cart().total_items(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: u32) -> CartItem {
        CartItem {
            id: "1-M-Black".to_string(),
            product_id: "1".to_string(),
            name: "Geometric Harmony".to_string(),
            price: Price::new(1499),
            image: String::new(),
            size: Some("M".to_string()),
            color: Some("Black".to_string()),
            quantity,
        }
    }

    #[test]
    fn test_line_view_steps() {
        let view = CartLineView::from(&item(1));
        assert_eq!(view.decrement, 0);
        assert_eq!(view.increment, 2);

        let view = CartLineView::from(&item(u32::MAX));
        assert_eq!(view.increment, i64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_count_fragment_renders_number() {
        let html = CartCountTemplate { cart_count: 7 }.render().unwrap_or_default();
        assert!(html.contains(">7<"));
    }
}
