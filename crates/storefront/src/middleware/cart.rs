//! Cart extractor.

use axum::{extract::FromRequestParts, http::request::Parts};
use graphphile_core::PersistentCart;
use tower_sessions::Session;

use crate::error::AppError;
use crate::services::SessionCartStore;

/// The visitor's cart, loaded from their session.
///
/// Mutations through the inner [`PersistentCart`] are written back to the
/// session before they return.
pub struct SessionCart(pub PersistentCart<SessionCartStore>);

impl<S> FromRequestParts<S> for SessionCart
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer missing".to_string()))?;

        Ok(Self(
            PersistentCart::open(SessionCartStore::new(session)).await,
        ))
    }
}
