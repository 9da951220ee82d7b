//! One-shot flash messages for the console.

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
    session
        .remove::<Flash>(session_keys::FLASH)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Failed to read flash message"))
        .ok()
        .flatten()
}
