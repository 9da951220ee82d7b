//! Supabase Auth (`GoTrue`) REST client.
//!
//! Only the handful of endpoints the storefront needs are wrapped:
//!
//! | Operation | Endpoint |
//! |---|---|
//! | password sign-in | `POST /auth/v1/token?grant_type=password` |
//! | sign-up | `POST /auth/v1/signup` |
//! | current user | `GET /auth/v1/user` |
//! | sign-out | `POST /auth/v1/logout` |
//! | OAuth start | `GET /auth/v1/authorize?provider=...&redirect_to=...` |
//!
//! Every request carries the project's anonymous key in the `apikey` header.

mod types;

pub use types::*;

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::config::SupabaseConfig;

/// Errors that can occur when talking to Supabase Auth.
#[derive(Debug, Error)]
pub enum SupabaseError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Supabase answered with an error status.
    #[error("Supabase API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the response body.
        message: String,
    },

    /// The configured project URL could not be used to build a request URL.
    #[error("Invalid Supabase URL: {0}")]
    Url(#[from] url::ParseError),
}

impl SupabaseError {
    /// Whether the error was caused by what the visitor typed (bad password,
    /// existing account, weak password) rather than by the service.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 400 && *status < 500)
    }

    /// Message suitable for showing to the visitor.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } if self.is_client_error() => message.clone(),
            _ => "Authentication service is unavailable. Please try again.".to_string(),
        }
    }
}

/// Supabase Auth client.
///
/// Cheap to clone; the HTTP connection pool is shared.
#[derive(Clone)]
pub struct SupabaseClient {
    inner: Arc<SupabaseClientInner>,
}

struct SupabaseClientInner {
    client: reqwest::Client,
    base_url: String,
    anon_key: SecretString,
}

impl SupabaseClient {
    /// Create a new client for the configured project.
    #[must_use]
    pub fn new(config: &SupabaseConfig) -> Self {
        Self {
            inner: Arc::new(SupabaseClientInner {
                client: reqwest::Client::new(),
                base_url: config.url.trim_end_matches('/').to_string(),
                anon_key: config.anon_key.clone(),
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.inner.base_url)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // OAuth
    // ─────────────────────────────────────────────────────────────────────────

    /// URL that starts the hosted OAuth flow for `provider`.
    ///
    /// Supabase redirects back to `redirect_to` with the session tokens in the
    /// URL fragment.
    ///
    /// # Errors
    ///
    /// Returns an error if the project URL is not a valid base URL.
    pub fn authorize_url(&self, provider: &str, redirect_to: &str) -> Result<String, SupabaseError> {
        let mut url = Url::parse(&self.endpoint("authorize"))?;
        url.query_pairs_mut()
            .append_pair("provider", provider)
            .append_pair("redirect_to", redirect_to);
        Ok(url.into())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Password auth
    // ─────────────────────────────────────────────────────────────────────────

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `SupabaseError::Api` with status 400 for wrong credentials or
    /// an unconfirmed email, and transport errors otherwise.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<AuthSession, SupabaseError> {
        let body = serde_json::json!({
            "email": email,
            "password": password.expose_secret(),
        });

        let response = self
            .inner
            .client
            .post(self.endpoint("token?grant_type=password"))
            .header("apikey", self.inner.anon_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Create an account.
    ///
    /// When the project requires email confirmation Supabase returns the new
    /// user without a session; see [`SignUpOutcome`].
    ///
    /// # Errors
    ///
    /// Returns `SupabaseError::Api` for an existing account or a password the
    /// project rejects, and transport errors otherwise.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &SecretString,
        full_name: Option<&str>,
    ) -> Result<SignUpOutcome, SupabaseError> {
        let body = serde_json::json!({
            "email": email,
            "password": password.expose_secret(),
            "data": { "full_name": full_name },
        });

        let response = self
            .inner
            .client
            .post(self.endpoint("signup"))
            .header("apikey", self.inner.anon_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        let value: serde_json::Value = Self::parse(response).await?;
        SignUpOutcome::from_value(value)
    }

    /// Fetch the user that owns `access_token`.
    ///
    /// # Errors
    ///
    /// Returns `SupabaseError::Api` with status 401 for an expired or
    /// unknown token.
    pub async fn get_user(&self, access_token: &str) -> Result<SupabaseUser, SupabaseError> {
        let response = self
            .inner
            .client
            .get(self.endpoint("user"))
            .header("apikey", self.inner.anon_key.expose_secret())
            .bearer_auth(access_token)
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Revoke the session behind `access_token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Supabase rejects it.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), SupabaseError> {
        let response = self
            .inner
            .client
            .post(self.endpoint("logout"))
            .header("apikey", self.inner.anon_key.expose_secret())
            .bearer_auth(access_token)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(());
        }
        Err(Self::api_error(response).await)
    }

    /// Check that the Auth service answers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports unhealthy.
    pub async fn health(&self) -> Result<(), SupabaseError> {
        let response = self
            .inner
            .client
            .get(self.endpoint("health"))
            .header("apikey", self.inner.anon_key.expose_secret())
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(());
        }
        Err(Self::api_error(response).await)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Response handling
    // ─────────────────────────────────────────────────────────────────────────

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, SupabaseError> {
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn api_error(response: reqwest::Response) -> SupabaseError {
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        let message = ApiErrorBody::message_from(&text);
        tracing::debug!(status, message = %message, "Supabase Auth request rejected");
        SupabaseError::Api { status, message }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client() -> SupabaseClient {
        SupabaseClient::new(&SupabaseConfig {
            url: "https://project.supabase.co/".to_string(),
            anon_key: SecretString::from("anon"),
        })
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        assert_eq!(
            client().endpoint("signup"),
            "https://project.supabase.co/auth/v1/signup"
        );
    }

    #[test]
    fn test_authorize_url_encodes_redirect() {
        let url = client()
            .authorize_url("google", "http://localhost:3000/auth/callback")
            .unwrap();
        assert_eq!(
            url,
            "https://project.supabase.co/auth/v1/authorize?provider=google&redirect_to=http%3A%2F%2Flocalhost%3A3000%2Fauth%2Fcallback"
        );
    }

    #[test]
    fn test_user_message_hides_server_errors() {
        let bad_password = SupabaseError::Api {
            status: 400,
            message: "Invalid login credentials".to_string(),
        };
        assert!(bad_password.is_client_error());
        assert_eq!(bad_password.user_message(), "Invalid login credentials");

        let outage = SupabaseError::Api {
            status: 503,
            message: "upstream connect error".to_string(),
        };
        assert!(!outage.is_client_error());
        assert!(!outage.user_message().contains("upstream"));
    }
}
