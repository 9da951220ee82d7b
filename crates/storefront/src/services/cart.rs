//! Session-backed cart persistence.
//!
//! The serialized cart lives in the visitor's session record under
//! [`session_keys::CART`](crate::models::session_keys::CART), as the raw JSON
//! array produced by [`Cart::to_json`](graphphile_core::Cart::to_json).

use graphphile_core::CartStore;
use tower_sessions::Session;

use crate::models::session_keys;

/// [`CartStore`] over a tower-sessions [`Session`].
#[derive(Debug, Clone)]
pub struct SessionCartStore {
    session: Session,
}

impl SessionCartStore {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

impl CartStore for SessionCartStore {
    type Error = tower_sessions::session::Error;

    async fn load(&self) -> Result<Option<String>, Self::Error> {
        self.session.get::<String>(session_keys::CART).await
    }

    async fn save(&self, raw: &str) -> Result<(), Self::Error> {
        self.session.insert(session_keys::CART, raw).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use graphphile_core::{AddOptions, PersistentCart, catalog};
    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_cart_round_trips_through_session() {
        let session = session();
        let product = catalog::find_product("1").unwrap();

        let mut cart = PersistentCart::open(SessionCartStore::new(session.clone())).await;
        cart.add_item(product, AddOptions::default()).await.unwrap();

        let raw: Option<String> = session.get(session_keys::CART).await.unwrap();
        assert!(raw.unwrap().starts_with('['));

        let reopened = PersistentCart::open(SessionCartStore::new(session)).await;
        assert_eq!(reopened.cart().total_items(), 1);
    }

    #[tokio::test]
    async fn test_wrong_shape_in_session_gives_empty_cart() {
        let session = session();
        session.insert(session_keys::CART, 42).await.unwrap();

        let cart = PersistentCart::open(SessionCartStore::new(session)).await;
        assert!(cart.cart().is_empty());
    }
}
