//! Authentication route handlers.
//!
//! Customers sign in with email and password or with Google, both through
//! Supabase Auth. Google sign-in returns its tokens in the URL fragment, which
//! never reaches the server; the callback page posts them to `/auth/session`.
//!
//! The sign-in page also keeps a demo admin toggle that forwards to the admin
//! console.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use rand::{Rng, distr::Alphanumeric};
use secrecy::SecretString;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{
    OptionalAuth, PageChrome, clear_current_customer, set_current_customer, set_flash,
};
use crate::models::{CurrentCustomer, Flash, session_keys};
use crate::seo::Seo;
use crate::state::AppState;
use crate::supabase::SignUpOutcome;

/// Demo admin username accepted by the sign-in admin toggle.
pub const ADMIN_USERNAME: &str = "admin";

/// Demo admin password accepted by the sign-in admin toggle.
pub const ADMIN_PASSWORD: &str = "12345678";

/// Shortest password accepted on sign-up.
pub const MIN_PASSWORD_LEN: usize = 6;

const OAUTH_STATE_LEN: usize = 32;

// =============================================================================
// Form Types
// =============================================================================

/// Sign-in form data.
///
/// `email` holds the username when `mode` is `admin`.
#[derive(Debug, Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub mode: Option<String>,
}

impl SignInForm {
    fn is_admin(&self) -> bool {
        self.mode.as_deref() == Some("admin")
    }
}

/// Sign-up form data.
#[derive(Debug, Deserialize)]
pub struct SignUpForm {
    #[serde(default)]
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    /// Check the fields before calling Supabase.
    ///
    /// # Errors
    ///
    /// Returns the message to flash for the first problem found.
    pub fn validate(&self) -> std::result::Result<(), &'static str> {
        if self.email.trim().is_empty() {
            return Err("Please enter your email address");
        }
        if self.password != self.confirm_password {
            return Err("Passwords don't match");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err("Password must be at least 6 characters");
        }
        Ok(())
    }

    fn full_name(&self) -> Option<&str> {
        Some(self.full_name.trim()).filter(|n| !n.is_empty())
    }
}

/// Tokens posted by the OAuth callback page.
#[derive(Debug, Deserialize)]
pub struct StoreSessionForm {
    pub access_token: String,
    pub state: String,
}

// =============================================================================
// Query Types
// =============================================================================

/// Sign-in page query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct SignInQuery {
    #[serde(default)]
    pub mode: Option<String>,
}

/// Query parameters Supabase appends to the OAuth callback.
#[derive(Debug, Default, Deserialize)]
pub struct CallbackQuery {
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Sign-in page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/signin.html")]
pub struct SignInTemplate {
    pub chrome: PageChrome,
    pub seo: Seo,
    pub admin_mode: bool,
}

/// Sign-up page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/signup.html")]
pub struct SignUpTemplate {
    pub chrome: PageChrome,
    pub seo: Seo,
    pub min_password_len: usize,
}

/// OAuth landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/callback.html")]
pub struct CallbackTemplate {
    pub chrome: PageChrome,
    pub seo: Seo,
    pub state: String,
}

/// Random token for the OAuth `state` round trip.
fn generate_oauth_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(OAUTH_STATE_LEN)
        .map(char::from)
        .collect()
}

async fn sign_in_customer(session: &Session, customer: &CurrentCustomer) -> Result<()> {
    set_current_customer(session, customer).await?;
    set_sentry_user(&customer.id, Some(customer.email.as_str()));
    add_breadcrumb("auth", "Signed in", None);
    tracing::info!(customer_id = %customer.id, "Customer signed in");
    Ok(())
}

// =============================================================================
// Sign In
// =============================================================================

/// Display the sign-in page.
///
/// Signed-in customers go straight to their account.
#[instrument(skip(chrome, auth))]
pub async fn signin_page(
    chrome: PageChrome,
    auth: OptionalAuth,
    Query(query): Query<SignInQuery>,
) -> Response {
    if auth.0.is_some() {
        return Redirect::to("/account").into_response();
    }

    SignInTemplate {
        chrome,
        seo: Seo::new("Sign In", "Sign in to your Graphphile account.").noindex(),
        admin_mode: query.mode.as_deref() == Some("admin"),
    }
    .into_response()
}

/// Handle sign-in form submission.
///
/// # Errors
///
/// Returns a session error if the signed-in customer cannot be stored.
#[instrument(skip(state, session, form))]
pub async fn signin(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SignInForm>,
) -> Result<Response> {
    if form.is_admin() {
        if form.email.trim() == ADMIN_USERNAME && form.password == ADMIN_PASSWORD {
            tracing::info!("Demo admin sign-in, forwarding to admin console");
            return Ok(Redirect::to(&state.config().admin_url).into_response());
        }
        set_flash(&session, Flash::error("Invalid admin credentials")).await;
        return Ok(Redirect::to("/signin?mode=admin").into_response());
    }

    let email = form.email.trim();
    let password = SecretString::from(form.password);
    let auth_session = match state
        .supabase()
        .sign_in_with_password(email, &password)
        .await
    {
        Ok(auth_session) => auth_session,
        Err(e) => {
            tracing::warn!(error = %e, "Sign-in failed");
            set_flash(&session, Flash::error(e.user_message())).await;
            return Ok(Redirect::to("/signin").into_response());
        }
    };

    let Some(customer) = CurrentCustomer::from_session(auth_session) else {
        tracing::warn!("Signed-in account has no usable email");
        set_flash(&session, Flash::error("This account has no email address")).await;
        return Ok(Redirect::to("/signin").into_response());
    };

    sign_in_customer(&session, &customer).await?;
    set_flash(&session, Flash::success("Welcome back to Graphphile!")).await;

    Ok(Redirect::to("/account").into_response())
}

// =============================================================================
// Sign Up
// =============================================================================

/// Display the sign-up page.
#[instrument(skip(chrome))]
pub async fn signup_page(chrome: PageChrome) -> impl IntoResponse {
    SignUpTemplate {
        chrome,
        seo: Seo::new("Create Account", "Join Graphphile.").noindex(),
        min_password_len: MIN_PASSWORD_LEN,
    }
}

/// Handle sign-up form submission.
///
/// # Errors
///
/// Returns a session error if the signed-in customer cannot be stored.
#[instrument(skip(state, session, form))]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SignUpForm>,
) -> Result<Response> {
    if let Err(message) = form.validate() {
        set_flash(&session, Flash::error(message)).await;
        return Ok(Redirect::to("/signup").into_response());
    }

    let password = SecretString::from(form.password.as_str());
    let outcome = match state
        .supabase()
        .sign_up(form.email.trim(), &password, form.full_name())
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::warn!(error = %e, "Sign-up failed");
            set_flash(&session, Flash::error(e.user_message())).await;
            return Ok(Redirect::to("/signup").into_response());
        }
    };

    match outcome {
        SignUpOutcome::SignedIn(auth_session) => {
            if let Some(customer) = CurrentCustomer::from_session(auth_session) {
                sign_in_customer(&session, &customer).await?;
                set_flash(&session, Flash::success("Account created successfully!")).await;
                return Ok(Redirect::to("/account").into_response());
            }
            set_flash(&session, Flash::success("Account created. You can now sign in.")).await;
        }
        SignUpOutcome::ConfirmationRequired(_) => {
            set_flash(
                &session,
                Flash::info("Account created. Check your email to confirm it, then sign in."),
            )
            .await;
        }
    }

    Ok(Redirect::to("/signin").into_response())
}

// =============================================================================
// Google OAuth
// =============================================================================

/// Start Google sign-in through Supabase.
///
/// # Errors
///
/// Returns a session error if the state cannot be stored, or a Supabase
/// error if the authorize URL cannot be built.
#[instrument(skip(state, session))]
pub async fn google(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    let oauth_state = generate_oauth_state();
    session
        .insert(session_keys::OAUTH_STATE, &oauth_state)
        .await?;

    let mut redirect_to = url::Url::parse(&state.config().oauth_callback_url())
        .map_err(crate::supabase::SupabaseError::from)?;
    redirect_to
        .query_pairs_mut()
        .append_pair("state", &oauth_state);

    let authorize_url = state
        .supabase()
        .authorize_url("google", redirect_to.as_str())?;

    Ok(Redirect::to(&authorize_url))
}

/// OAuth landing page.
///
/// Provider errors arrive as query parameters and go back to sign-in with a
/// flash. Otherwise the page's script reads the tokens from the fragment and
/// posts them with the `state` echoed here.
#[instrument(skip(chrome, session, query))]
pub async fn callback(
    chrome: PageChrome,
    session: Session,
    Query(query): Query<CallbackQuery>,
) -> Response {
    if let Some(error) = query.error {
        let description = query.error_description.unwrap_or_default();
        tracing::warn!(error = %error, description = %description, "OAuth provider error");
        set_flash(&session, Flash::error("Google sign-in was cancelled or failed")).await;
        return Redirect::to("/signin").into_response();
    }

    CallbackTemplate {
        chrome,
        seo: Seo::new("Signing In", "Completing sign-in.").noindex(),
        state: query.state.unwrap_or_default(),
    }
    .into_response()
}

/// Store the tokens posted by the OAuth landing page.
///
/// # Errors
///
/// Returns a session error if the session cannot be modified.
#[instrument(skip(state, session, form))]
pub async fn store_session(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<StoreSessionForm>,
) -> Result<Redirect> {
    let expected: Option<String> = session.remove(session_keys::OAUTH_STATE).await?;
    if expected.as_deref() != Some(form.state.as_str()) || form.state.is_empty() {
        tracing::warn!("OAuth state mismatch");
        set_flash(&session, Flash::error("Sign-in expired. Please try again.")).await;
        return Ok(Redirect::to("/signin"));
    }

    let user = match state.supabase().get_user(&form.access_token).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(error = %e, "OAuth token rejected");
            set_flash(&session, Flash::error(e.user_message())).await;
            return Ok(Redirect::to("/signin"));
        }
    };

    let Some(customer) = CurrentCustomer::from_user(&user, form.access_token) else {
        set_flash(&session, Flash::error("Your Google account did not share an email address")).await;
        return Ok(Redirect::to("/signin"));
    };

    sign_in_customer(&session, &customer).await?;
    set_flash(
        &session,
        Flash::success(format!("Welcome, {}!", customer.greeting_name())),
    )
    .await;

    Ok(Redirect::to("/account"))
}

// =============================================================================
// Sign Out
// =============================================================================

/// Sign out.
///
/// The Supabase session is revoked best-effort; the local sign-in is always
/// cleared. The cart stays in the session.
///
/// # Errors
///
/// Returns a session error if the session cannot be modified.
#[instrument(skip(state, session, auth))]
pub async fn signout(
    State(state): State<AppState>,
    session: Session,
    auth: OptionalAuth,
) -> Result<Redirect> {
    if let Some(customer) = auth.0 {
        if let Err(e) = state.supabase().sign_out(&customer.access_token).await {
            tracing::warn!(error = %e, "Supabase sign-out failed");
        }
        tracing::info!(customer_id = %customer.id, "Customer signed out");
    }

    clear_current_customer(&session).await?;
    clear_sentry_user();
    add_breadcrumb("auth", "Signed out", None);
    set_flash(&session, Flash::info("You have been signed out")).await;

    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup_form(password: &str, confirm: &str) -> SignUpForm {
        SignUpForm {
            full_name: " Asha Rao ".to_string(),
            email: "asha@example.com".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_signup_validation() {
        assert_eq!(
            signup_form("secret1", "secret2").validate(),
            Err("Passwords don't match")
        );
        assert_eq!(
            signup_form("abc", "abc").validate(),
            Err("Password must be at least 6 characters")
        );
        assert_eq!(signup_form("secret1", "secret1").validate(), Ok(()));
    }

    #[test]
    fn test_signup_full_name_trimmed() {
        let form = signup_form("secret1", "secret1");
        assert_eq!(form.full_name(), Some("Asha Rao"));

        let form = SignUpForm {
            full_name: "   ".to_string(),
            ..form
        };
        assert_eq!(form.full_name(), None);
    }

    #[test]
    fn test_oauth_state_is_alphanumeric() {
        let state = generate_oauth_state();
        assert_eq!(state.len(), OAUTH_STATE_LEN);
        assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(state, generate_oauth_state());
    }

    #[test]
    fn test_admin_mode_detection() {
        let form = SignInForm {
            email: "admin".to_string(),
            password: "12345678".to_string(),
            mode: Some("admin".to_string()),
        };
        assert!(form.is_admin());

        let form = SignInForm { mode: None, ..form };
        assert!(!form.is_admin());
    }
}
