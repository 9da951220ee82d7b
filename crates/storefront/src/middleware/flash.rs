//! One-shot flash messages.
//!
//! A handler that redirects calls [`set_flash`]; the next full page render
//! takes it out of the session with [`take_flash`] and shows it once.

use tower_sessions::Session;

use crate::models::{Flash, session_keys};

/// Queue a flash message for the next page render.
///
/// Failures are logged, not returned.
pub async fn set_flash(session: &Session, flash: Flash) {
    if let Err(e) = session.insert(session_keys::FLASH, &flash).await {
        tracing::warn!(error = %e, "Failed to store flash message");
    }
}

/// Remove and return the pending flash message, if any.
pub async fn take_flash(session: &Session) -> Option<Flash> {
    match session.remove::<Flash>(session_keys::FLASH).await {
        Ok(flash) => flash,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read flash message");
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    #[tokio::test]
    async fn test_flash_is_shown_once() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);
        set_flash(&session, Flash::error("Please select a size")).await;

        let first = take_flash(&session).await.unwrap();
        assert_eq!(first.message, "Please select a size");
        assert!(take_flash(&session).await.is_none());
    }
}
