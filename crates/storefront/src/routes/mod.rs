//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//!
//! # Catalog
//! GET  /products               - Product listing (?category=&color=&size=&sort=)
//! GET  /product/{id}           - Product detail
//! POST /product/{id}/add       - Add to cart
//! GET  /collections            - Collection listing
//! GET  /collections/{slug}     - Collection detail
//! GET  /search                 - Search results (?q=)
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/update            - Update quantity
//! POST /cart/remove            - Remove item
//! POST /cart/clear             - Empty the cart
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Auth
//! GET  /signin                 - Sign-in page (?mode=admin for the demo admin toggle)
//! POST /signin                 - Sign-in action
//! GET  /signup                 - Sign-up page
//! POST /signup                 - Sign-up action
//! GET  /auth/google            - Redirect to Supabase Google OAuth
//! GET  /auth/callback          - OAuth landing page
//! POST /auth/session           - Store tokens posted by the landing page
//! POST /signout                - Sign out
//!
//! # Account (requires auth)
//! GET  /account                - Account overview
//!
//! # Content
//! GET  /about /designers /sustainability /careers /privacy /terms /shipping /contact
//! ```
//!
//! Anything else renders the 404 page.

pub mod account;
pub mod auth;
pub mod cart;
pub mod collections;
pub mod home;
pub mod pages;
pub mod products;
pub mod search;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the collection routes router.
pub fn collection_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(collections::index))
        .route("/{slug}", get(collections::show))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signin", get(auth::signin_page).post(auth::signin))
        .route("/signup", get(auth::signup_page).post(auth::signup))
        .route("/signout", post(auth::signout))
        .route("/auth/google", get(auth::google))
        .route("/auth/callback", get(auth::callback))
        .route("/auth/session", post(auth::store_session))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/products", get(products::index))
        .route("/product/{id}", get(products::show))
        .route("/product/{id}/add", post(products::add))
        .route("/product/{id}/quick-add", post(products::quick_add))
        .nest("/collections", collection_routes())
        .route("/search", get(search::search))
        .nest("/cart", cart_routes())
        .merge(auth_routes())
        .route("/account", get(account::index))
        .merge(pages::routes())
        .fallback(pages::not_found)
}
