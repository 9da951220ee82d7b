//! Session-related types for admin authentication.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

/// Session-stored admin identity.
///
/// Minimal data stored in the session to identify the logged-in admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Login name.
    pub username: String,
    /// Admin's display name.
    pub name: String,
}

impl CurrentAdmin {
    /// The demo operator granted by the literal console credentials.
    #[must_use]
    pub fn demo(username: &str) -> Self {
        Self {
            username: username.to_string(),
            name: "Store Admin".to_string(),
        }
    }
}

/// Session keys for admin data.
pub mod keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";

    /// Key for the pending flash message.
    pub const FLASH: &str = "flash";
}
