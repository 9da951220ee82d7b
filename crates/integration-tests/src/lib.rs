//! Integration tests for Graphphile.
//!
//! The storefront and admin routers are driven in-process with
//! `tower::ServiceExt::oneshot`; nothing binds a port and no test talks to
//! Supabase.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p graphphile-integration-tests
//! ```
//!
//! # Test Files
//!
//! - `storefront` - health, 404 page, cart round trip through the session
//! - `admin` - login gate, demo sign-in, CSV export

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode, header};
use tower::ServiceExt;

/// Storefront router with local configuration.
#[must_use]
pub fn storefront() -> Router {
    let config = graphphile_storefront::config::StorefrontConfig::local();
    graphphile_storefront::app(graphphile_storefront::state::AppState::new(config))
}

/// Admin router with local configuration.
#[must_use]
pub fn admin() -> Router {
    let config = graphphile_admin::config::AdminConfig::local();
    graphphile_admin::app(graphphile_admin::state::AppState::new(config))
}

/// A finished response with its body read into memory.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    /// `name=value` part of the first `Set-Cookie` header.
    pub cookie: Option<String>,
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
    pub body: String,
}

impl TestResponse {
    async fn read(response: Response<Body>) -> Self {
        let headers = response.headers();
        let text = |name: header::HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };

        let status = response.status();
        let location = text(header::LOCATION);
        let cookie = text(header::SET_COOKIE)
            .and_then(|c| c.split(';').next().map(str::to_string));
        let content_type = text(header::CONTENT_TYPE);
        let content_disposition = text(header::CONTENT_DISPOSITION);

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_default();

        Self {
            status,
            location,
            cookie,
            content_type,
            content_disposition,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

/// Send one request through `app`.
///
/// # Panics
///
/// Panics if the request cannot be built or the router fails, both of which
/// are test bugs.
#[allow(clippy::unwrap_used)]
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    form: Option<&str>,
) -> TestResponse {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    let body = match form {
        Some(form) => {
            request = request.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
            Body::from(form.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    TestResponse::read(response).await
}

/// `GET uri`.
pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> TestResponse {
    send(app, "GET", uri, cookie, None).await
}

/// `POST uri` with a url-encoded form body.
pub async fn post_form(app: &Router, uri: &str, cookie: Option<&str>, form: &str) -> TestResponse {
    send(app, "POST", uri, cookie, Some(form)).await
}
