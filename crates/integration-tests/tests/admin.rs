//! Admin router tests: the login gate, the demo sign-in and CSV export.

use axum::http::StatusCode;
use graphphile_admin::export::Dataset;
use graphphile_integration_tests::{admin, get, post_form};

/// Sign in with the demo credentials and return the session cookie.
async fn sign_in(app: &axum::Router) -> String {
    let response = post_form(app, "/auth/login", None, "username=admin&password=12345678").await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/"));
    response.cookie.expect("session cookie")
}

#[tokio::test]
async fn test_health() {
    let app = admin();
    let response = get(&app, "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_pages_redirect_to_login_without_session() {
    let app = admin();

    for path in ["/", "/products", "/orders", "/customers/1", "/import-export"] {
        let response = get(&app, path, None).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "{path}");
        assert_eq!(response.location.as_deref(), Some("/auth/login"), "{path}");
    }
}

#[tokio::test]
async fn test_export_without_session_is_unauthorized() {
    let app = admin();
    let response = get(&app, "/export/orders.csv", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_password_rerenders_login() {
    let app = admin();
    let response = post_form(&app, "/auth/login", None, "username=admin&password=hunter2").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.body.contains("Invalid username or password"));
    assert!(response.body.contains("value=\"admin\""));
}

#[tokio::test]
async fn test_demo_login_opens_dashboard() {
    let app = admin();
    let cookie = sign_in(&app).await;

    let dashboard = get(&app, "/", Some(&cookie)).await;
    assert_eq!(dashboard.status, StatusCode::OK);
    assert!(dashboard.body.contains("Admin Dashboard"));
    assert!(dashboard.body.contains("Admin Login Successful"));

    let login = get(&app, "/auth/login", Some(&cookie)).await;
    assert_eq!(login.status, StatusCode::SEE_OTHER);
    assert_eq!(login.location.as_deref(), Some("/"));
}

#[tokio::test]
async fn test_list_and_detail_pages_render() {
    let app = admin();
    let cookie = sign_in(&app).await;

    for path in [
        "/products",
        "/products/new",
        "/products/1/edit",
        "/orders?status=delivered",
        "/orders/ORD123456",
        "/customers?q=vikram",
        "/customers/1",
        "/collections",
        "/categories",
        "/segments",
        "/campaigns",
        "/reviews",
        "/returns",
        "/shipments",
        "/content/homepage",
        "/content/banners",
        "/content/blocks",
        "/content/blog",
        "/media?type=images",
        "/import-export",
    ] {
        let response = get(&app, path, Some(&cookie)).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
    }

    let order = get(&app, "/orders/ORD123456", Some(&cookie)).await;
    assert!(order.body.contains("Amit Sharma"));

    let customer = get(&app, "/customers/1", Some(&cookie)).await;
    assert!(customer.body.contains("/orders/ORD24001"));
    assert!(customer.body.contains("badge badge-success"));

    let missing = get(&app, "/orders/ORD000000", Some(&cookie)).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_product_form_validation() {
    let app = admin();
    let cookie = sign_in(&app).await;

    let response = post_form(&app, "/products", Some(&cookie), "intent=save&name=&price=100").await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("flash-error"));
}

#[tokio::test]
async fn test_csv_export() {
    let app = admin();
    let cookie = sign_in(&app).await;

    let response = get(&app, "/export/orders.csv", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.content_type.as_deref(),
        Some("text/csv; charset=utf-8")
    );
    assert!(
        response
            .content_disposition
            .as_deref()
            .is_some_and(|d| d.contains("orders.csv"))
    );

    let lines: Vec<&str> = response.body.lines().collect();
    assert_eq!(lines.len(), Dataset::Orders.record_count() + 1);
    assert_eq!(
        lines[0],
        "id,customer,date,amount,status,items,payment_method"
    );

    let unknown = get(&app, "/export/invoices.csv", Some(&cookie)).await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_logout_ends_session() {
    let app = admin();
    let cookie = sign_in(&app).await;

    let response = post_form(&app, "/auth/logout", Some(&cookie), "").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/auth/login"));

    let dashboard = get(&app, "/", Some(&cookie)).await;
    assert_eq!(dashboard.location.as_deref(), Some("/auth/login"));

    let login = get(&app, "/auth/login", Some(&cookie)).await;
    assert!(login.body.contains("You have been signed out."));
}
