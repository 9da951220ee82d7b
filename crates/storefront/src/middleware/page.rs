//! Shared page chrome.
//!
//! Every full HTML page renders the same header (cart badge, account link)
//! and may show a pending flash message. [`PageChrome`] gathers that from the
//! session in one extractor so handlers only deal with their own content.

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::request::Parts,
};
use tower_sessions::Session;

use crate::middleware::auth::current_customer;
use crate::middleware::flash::take_flash;
use crate::models::{CurrentCustomer, Flash};
use crate::services::SessionCartStore;
use crate::state::AppState;
use graphphile_core::PersistentCart;

/// Header, footer and flash data for the base template.
#[derive(Debug, Clone, Default)]
pub struct PageChrome {
    /// Flash message to show on this render (already removed from the session).
    pub flash: Option<Flash>,
    /// Number of units in the cart, for the header badge.
    pub cart_count: u64,
    /// Signed-in customer, if any.
    pub customer: Option<CurrentCustomer>,
    /// Request path, for canonical URLs and active nav links.
    pub path: String,
    /// Public base URL of the storefront.
    pub base_url: String,
}

impl PageChrome {
    /// Absolute canonical URL of the current page.
    #[must_use]
    pub fn canonical_url(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }

    /// Whether the nav link for `prefix` should be highlighted.
    #[must_use]
    pub fn is_active(&self, prefix: &str) -> bool {
        if prefix == "/" {
            return self.path == "/";
        }
        self.path.starts_with(prefix)
    }
}

impl FromRequestParts<AppState> for PageChrome {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let mut chrome = Self {
            path: parts
                .extensions
                .get::<OriginalUri>()
                .map_or_else(|| parts.uri.path(), |uri| uri.path())
                .to_string(),
            base_url: state.config().base_url.clone(),
            ..Self::default()
        };

        if let Some(session) = parts.extensions.get::<Session>().cloned() {
            chrome.flash = take_flash(&session).await;
            chrome.customer = current_customer(&session).await;
            chrome.cart_count = PersistentCart::open(SessionCartStore::new(session))
                .await
                .cart()
                .total_items();
        }

        Ok(chrome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        let chrome = PageChrome {
            path: "/products".to_string(),
            ..PageChrome::default()
        };
        assert!(chrome.is_active("/products"));
        assert!(!chrome.is_active("/"));
        assert!(!chrome.is_active("/collections"));
    }

    #[test]
    fn test_canonical_url() {
        let chrome = PageChrome {
            path: "/product/1".to_string(),
            base_url: "https://graphphile.test".to_string(),
            ..PageChrome::default()
        };
        assert_eq!(chrome.canonical_url(), "https://graphphile.test/product/1");
    }
}
