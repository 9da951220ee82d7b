//! Storefront router tests: health, 404 and the session-backed cart.

use axum::http::StatusCode;
use graphphile_core::catalog;
use graphphile_integration_tests::{get, post_form, storefront};

#[tokio::test]
async fn test_health() {
    let app = storefront();
    let response = get(&app, "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_unknown_path_renders_not_found_page() {
    let app = storefront();
    let response = get(&app, "/no-such-page", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("Oops! Page not found"));
}

#[tokio::test]
async fn test_product_listing_shows_catalog() {
    let app = storefront();
    let response = get(&app, "/products", None).await;

    assert_eq!(response.status, StatusCode::OK);
    for product in catalog::products() {
        assert!(
            response.body.contains(&product.name),
            "missing {}",
            product.name
        );
    }
}

#[tokio::test]
async fn test_search_matches_catalog_search() {
    let app = storefront();
    let response = get(&app, "/search?q=waves", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let matches = catalog::search("waves");
    assert!(!matches.is_empty());
    for product in matches {
        assert!(response.body.contains(&product.name));
    }
}

#[tokio::test]
async fn test_add_to_cart_updates_count() {
    let app = storefront();

    let added = post_form(
        &app,
        "/product/1/add",
        None,
        "size=M&color=Black&quantity=2",
    )
    .await;
    assert_eq!(added.status, StatusCode::SEE_OTHER);
    assert_eq!(added.location.as_deref(), Some("/product/1"));
    let cookie = added.cookie.expect("session cookie");

    let count = get(&app, "/cart/count", Some(&cookie)).await;
    assert_eq!(count.status, StatusCode::OK);
    assert!(count.body.contains(">2<"), "body: {}", count.body);

    let again = post_form(
        &app,
        "/product/1/add",
        Some(&cookie),
        "size=M&color=Black&quantity=1",
    )
    .await;
    assert_eq!(again.status, StatusCode::SEE_OTHER);

    let count = get(&app, "/cart/count", Some(&cookie)).await;
    assert!(count.body.contains(">3<"), "body: {}", count.body);

    let page = get(&app, "/product/1", Some(&cookie)).await;
    assert!(page.body.contains("added to your cart"));
}

#[tokio::test]
async fn test_add_without_selection_flashes_error() {
    let app = storefront();

    let response = post_form(&app, "/product/1/add", None, "quantity=1").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/product/1"));
    let cookie = response.cookie.expect("session cookie");

    let page = get(&app, "/product/1", Some(&cookie)).await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Please select a color"));

    let count = get(&app, "/cart/count", Some(&cookie)).await;
    assert!(count.body.contains(">0<"), "body: {}", count.body);
}

#[tokio::test]
async fn test_add_unknown_product_is_not_found() {
    let app = storefront();
    let response = post_form(&app, "/product/999/add", None, "size=M&color=Black").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_quick_add_uses_first_size_and_color() {
    let app = storefront();
    let product = catalog::find_product("1").expect("product 1");

    let listing = get(&app, "/products", None).await;
    assert!(listing.body.contains("/product/1/quick-add"));

    let added = post_form(&app, "/product/1/quick-add", None, "return_to=%2Fproducts").await;
    assert_eq!(added.status, StatusCode::SEE_OTHER);
    assert_eq!(added.location.as_deref(), Some("/products"));
    let cookie = added.cookie.expect("session cookie");

    let cart = get(&app, "/cart", Some(&cookie)).await;
    assert_eq!(cart.status, StatusCode::OK);
    assert!(cart.body.contains(r#"value="1-S-White""#), "body: {}", cart.body);
    assert!(cart.body.contains(&product.price.to_string()));

    let count = get(&app, "/cart/count", Some(&cookie)).await;
    assert!(count.body.contains(">1<"), "body: {}", count.body);
}

#[tokio::test]
async fn test_quick_add_ignores_off_site_return() {
    let app = storefront();
    let added = post_form(
        &app,
        "/product/2/quick-add",
        None,
        "return_to=https%3A%2F%2Fevil.example",
    )
    .await;

    assert_eq!(added.status, StatusCode::SEE_OTHER);
    assert_eq!(added.location.as_deref(), Some("/products"));
}

#[tokio::test]
async fn test_cart_update_remove_and_clear() {
    let app = storefront();

    let added = post_form(
        &app,
        "/product/1/add",
        None,
        "size=M&color=Black&quantity=1",
    )
    .await;
    let cookie = added.cookie.expect("session cookie");

    let cart = get(&app, "/cart", Some(&cookie)).await;
    assert_eq!(cart.status, StatusCode::OK);
    assert!(cart.body.contains("Geometric Harmony"));
    assert!(cart.body.contains(r#"value="1-M-Black""#));

    // Quantities below one are stored as one.
    let updated = post_form(&app, "/cart/update", Some(&cookie), "id=1-M-Black&quantity=0").await;
    assert_eq!(updated.status, StatusCode::SEE_OTHER);
    assert_eq!(updated.location.as_deref(), Some("/cart"));
    let count = get(&app, "/cart/count", Some(&cookie)).await;
    assert!(count.body.contains(">1<"), "body: {}", count.body);

    let updated = post_form(&app, "/cart/update", Some(&cookie), "id=1-M-Black&quantity=4").await;
    assert_eq!(updated.status, StatusCode::SEE_OTHER);
    let count = get(&app, "/cart/count", Some(&cookie)).await;
    assert!(count.body.contains(">4<"), "body: {}", count.body);

    let rejected = post_form(&app, "/cart/update", Some(&cookie), "id=1-M-Black&quantity=abc").await;
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);
    let count = get(&app, "/cart/count", Some(&cookie)).await;
    assert!(count.body.contains(">4<"), "body: {}", count.body);

    let removed = post_form(&app, "/cart/remove", Some(&cookie), "id=9-XL-Red").await;
    assert_eq!(removed.status, StatusCode::SEE_OTHER);
    let count = get(&app, "/cart/count", Some(&cookie)).await;
    assert!(count.body.contains(">4<"), "body: {}", count.body);

    let cleared = post_form(&app, "/cart/clear", Some(&cookie), "").await;
    assert_eq!(cleared.status, StatusCode::SEE_OTHER);
    assert_eq!(cleared.location.as_deref(), Some("/cart"));
    let count = get(&app, "/cart/count", Some(&cookie)).await;
    assert!(count.body.contains(">0<"), "body: {}", count.body);

    let cart = get(&app, "/cart", Some(&cookie)).await;
    assert!(!cart.body.contains(r#"value="1-M-Black""#));
}

#[tokio::test]
async fn test_cart_remove_existing_line() {
    let app = storefront();

    let added = post_form(&app, "/product/1/quick-add", None, "").await;
    let cookie = added.cookie.expect("session cookie");

    let removed = post_form(&app, "/cart/remove", Some(&cookie), "id=1-S-White").await;
    assert_eq!(removed.status, StatusCode::SEE_OTHER);

    let cart = get(&app, "/cart", Some(&cookie)).await;
    assert!(cart.body.contains("removed from your cart"));
    let count = get(&app, "/cart/count", Some(&cookie)).await;
    assert!(count.body.contains(">0<"), "body: {}", count.body);
}
