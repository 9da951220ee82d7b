//! Supabase Auth response types.

use serde::Deserialize;

use super::SupabaseError;

/// A Supabase Auth user.
#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

impl SupabaseUser {
    /// Display name from the sign-up form or the OAuth provider profile.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        [&self.user_metadata.full_name, &self.user_metadata.name]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|n| !n.trim().is_empty())
    }
}

/// Free-form profile data; only the name fields are read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Tokens and user returned by a successful sign-in.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: SupabaseUser,
}

/// Result of a sign-up request.
#[derive(Debug, Clone)]
pub enum SignUpOutcome {
    /// The account is usable right away.
    SignedIn(AuthSession),
    /// A confirmation email was sent; the visitor must follow it first.
    ConfirmationRequired(SupabaseUser),
}

impl SignUpOutcome {
    /// Interpret a sign-up response body.
    ///
    /// With autoconfirm on, the body is a session (it has `access_token`).
    /// Otherwise it is the bare user object.
    ///
    /// # Errors
    ///
    /// Returns `SupabaseError::Parse` if the body is neither shape.
    pub fn from_value(value: serde_json::Value) -> Result<Self, SupabaseError> {
        if value.get("access_token").is_some() {
            return Ok(Self::SignedIn(serde_json::from_value(value)?));
        }
        Ok(Self::ConfirmationRequired(serde_json::from_value(value)?))
    }
}

/// Error body shapes returned by `GoTrue`.
///
/// Depending on the endpoint and version the message is in `msg`,
/// `error_description`, `message` or `error`.
#[derive(Debug, Default, Deserialize)]
pub(super) struct ApiErrorBody {
    msg: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl ApiErrorBody {
    pub(super) fn message_from(text: &str) -> String {
        let body: Self = serde_json::from_str(text).unwrap_or_default();
        body.msg
            .or(body.error_description)
            .or(body.message)
            .or(body.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "Request failed".to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_with_session() {
        let value = serde_json::json!({
            "access_token": "at",
            "refresh_token": "rt",
            "expires_in": 3600,
            "user": { "id": "u1", "email": "a@b.in", "user_metadata": { "full_name": "Asha" } }
        });
        match SignUpOutcome::from_value(value).unwrap() {
            SignUpOutcome::SignedIn(session) => {
                assert_eq!(session.access_token, "at");
                assert_eq!(session.user.display_name(), Some("Asha"));
            }
            SignUpOutcome::ConfirmationRequired(_) => panic!("expected a session"),
        }
    }

    #[test]
    fn test_sign_up_needing_confirmation() {
        let value = serde_json::json!({ "id": "u2", "email": "c@d.in" });
        assert!(matches!(
            SignUpOutcome::from_value(value).unwrap(),
            SignUpOutcome::ConfirmationRequired(user) if user.id == "u2"
        ));
    }

    #[test]
    fn test_display_name_falls_back_to_provider_name() {
        let user: SupabaseUser = serde_json::from_value(serde_json::json!({
            "id": "u3",
            "user_metadata": { "full_name": "", "name": "Google Person" }
        }))
        .unwrap();
        assert_eq!(user.display_name(), Some("Google Person"));

        let user: SupabaseUser =
            serde_json::from_value(serde_json::json!({ "id": "u4" })).unwrap();
        assert_eq!(user.display_name(), None);
    }

    #[test]
    fn test_error_message_shapes() {
        assert_eq!(
            ApiErrorBody::message_from(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#),
            "Invalid login credentials"
        );
        assert_eq!(
            ApiErrorBody::message_from(r#"{"code":422,"msg":"User already registered"}"#),
            "User already registered"
        );
        assert_eq!(ApiErrorBody::message_from("<html>"), "Request failed");
    }
}
