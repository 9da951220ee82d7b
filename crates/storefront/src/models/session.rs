//! Session-related types.
//!
//! Everything the storefront remembers about a visitor between requests lives
//! in their tower-sessions record under one of the [`keys`].

use serde::{Deserialize, Serialize};

use graphphile_core::Email;

use crate::supabase::{AuthSession, SupabaseUser};

/// Session-stored customer identity.
#[derive(Clone, Serialize, Deserialize)]
pub struct CurrentCustomer {
    /// Supabase user ID.
    pub id: String,
    /// Customer's email address.
    pub email: Email,
    /// Name from the sign-up form or OAuth profile.
    pub full_name: Option<String>,
    /// Supabase access token, kept for sign-out.
    pub access_token: String,
}

impl std::fmt::Debug for CurrentCustomer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentCustomer")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl CurrentCustomer {
    /// Build from a Supabase user and the token that fetched it.
    ///
    /// Returns `None` if the account has no usable email address (some
    /// OAuth providers can omit it).
    #[must_use]
    pub fn from_user(user: &SupabaseUser, access_token: String) -> Option<Self> {
        let email = Email::parse(user.email.as_deref()?).ok()?;
        Some(Self {
            id: user.id.clone(),
            email,
            full_name: user.display_name().map(str::to_string),
            access_token,
        })
    }

    /// Build from a password or sign-up session.
    #[must_use]
    pub fn from_session(session: AuthSession) -> Option<Self> {
        Self::from_user(&session.user, session.access_token)
    }

    /// Name for greetings: the full name, else the email's local part.
    #[must_use]
    pub fn greeting_name(&self) -> &str {
        self.full_name
            .as_deref()
            .unwrap_or_else(|| self.email.local_part())
    }
}

/// Session keys.
pub mod keys {
    /// Key for storing the signed-in customer.
    pub const CURRENT_CUSTOMER: &str = "current_customer";

    /// Key for the pending flash message.
    pub const FLASH: &str = "flash";

    /// Key for the serialized cart.
    pub const CART: &str = graphphile_core::CART_STORAGE_KEY;

    /// Key for the OAuth `state` value (CSRF protection for the callback form).
    pub const OAUTH_STATE: &str = "oauth_state";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user(email: Option<&str>, name: Option<&str>) -> SupabaseUser {
        serde_json::from_value(serde_json::json!({
            "id": "user-1",
            "email": email,
            "user_metadata": { "full_name": name },
        }))
        .unwrap()
    }

    #[test]
    fn test_from_user_requires_email() {
        assert!(CurrentCustomer::from_user(&user(None, None), "t".into()).is_none());
        assert!(CurrentCustomer::from_user(&user(Some("bogus"), None), "t".into()).is_none());
    }

    #[test]
    fn test_greeting_name_falls_back_to_local_part() {
        let named = CurrentCustomer::from_user(&user(Some("asha@x.in"), Some("Asha")), "t".into())
            .unwrap();
        assert_eq!(named.greeting_name(), "Asha");

        let anonymous =
            CurrentCustomer::from_user(&user(Some("ravi@x.in"), None), "t".into()).unwrap();
        assert_eq!(anonymous.greeting_name(), "ravi");
    }

    #[test]
    fn test_debug_redacts_token() {
        let customer =
            CurrentCustomer::from_user(&user(Some("a@x.in"), None), "secret-token".into())
                .unwrap();
        assert!(!format!("{customer:?}").contains("secret-token"));
    }

    #[test]
    fn test_cart_key_matches_storage_key() {
        assert_eq!(keys::CART, "graphphile_cart_v1");
    }
}
