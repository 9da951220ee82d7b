//! Security headers for admin responses.
//!
//! Stricter than the storefront: no sign-in provider to post to, and the
//! console must never be framed or cached by intermediaries.

use axum::{
    Router,
    http::{
        HeaderName, HeaderValue,
        header::{
            CACHE_CONTROL, CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS,
            X_FRAME_OPTIONS,
        },
    },
};
use tower_http::set_header::SetResponseHeaderLayer;

/// Content Security Policy applied to every admin response.
pub const CONTENT_SECURITY_POLICY_VALUE: &str = "default-src 'none'; \
     style-src 'self'; \
     img-src 'self' https://images.unsplash.com; \
     form-action 'self'; \
     base-uri 'none'; \
     frame-ancestors 'none'";

/// Headers set on every admin response, overriding any handler value.
#[must_use]
pub fn security_headers() -> [(HeaderName, HeaderValue); 5] {
    [
        (X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
        (X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
        (REFERRER_POLICY, HeaderValue::from_static("no-referrer")),
        (
            CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(CONTENT_SECURITY_POLICY_VALUE),
        ),
        (CACHE_CONTROL, HeaderValue::from_static("no-store")),
    ]
}

/// Wrap `router` in one `SetResponseHeaderLayer` per security header.
pub fn security_header_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    security_headers()
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(name, value))
        })
}
