//! Console sign-in with the demo credentials.

use askama::Template;
use axum::{
    Form,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{
    OptionalAdminAuth, clear_current_admin, set_current_admin, set_flash, take_flash,
};
use crate::models::{CurrentAdmin, Flash};

use super::render;

/// The only username the console accepts.
pub const DEMO_USERNAME: &str = "admin";

/// The only password the console accepts.
pub const DEMO_PASSWORD: &str = "12345678";

/// Login page template.
#[derive(Template)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub username: String,
    pub error: Option<String>,
    pub flash: Option<Flash>,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Whether the pair matches the demo credentials.
#[must_use]
pub fn is_demo_login(username: &str, password: &str) -> bool {
    username == DEMO_USERNAME && password == DEMO_PASSWORD
}

/// Display the login page, or go to the dashboard when already signed in.
#[instrument(skip(admin, session))]
pub async fn login_page(OptionalAdminAuth(admin): OptionalAdminAuth, session: Session) -> Response {
    if admin.is_some() {
        return Redirect::to("/").into_response();
    }

    render(&LoginTemplate {
        username: String::new(),
        error: None,
        flash: take_flash(&session).await,
    })
    .into_response()
}

/// Check the submitted credentials.
///
/// # Errors
///
/// Returns an error if the session cannot be written.
#[instrument(skip(session, form), fields(username = %form.username))]
pub async fn login(session: Session, Form(form): Form<LoginForm>) -> Result<Response> {
    if !is_demo_login(form.username.trim(), &form.password) {
        tracing::warn!("Rejected console login");
        let page: Html<String> = render(&LoginTemplate {
            username: form.username,
            error: Some("Invalid username or password".to_string()),
            flash: None,
        });
        return Ok((StatusCode::UNAUTHORIZED, page).into_response());
    }

    let admin = CurrentAdmin::demo(DEMO_USERNAME);
    set_current_admin(&session, &admin).await?;
    set_sentry_user(&admin.username);
    set_flash(
        &session,
        Flash::success("Admin Login Successful. Welcome to the admin dashboard."),
    )
    .await;
    tracing::info!("Console login");

    Ok(Redirect::to("/").into_response())
}

/// Sign out and return to the login page.
///
/// # Errors
///
/// Returns an error if the session cannot be written.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_current_admin(&session).await?;
    clear_sentry_user();
    set_flash(&session, Flash::info("You have been signed out.")).await;
    Ok(Redirect::to("/auth/login"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_demo_pair_is_accepted() {
        assert!(is_demo_login("admin", "12345678"));
        assert!(!is_demo_login("admin", "password"));
        assert!(!is_demo_login("Admin", "12345678"));
        assert!(!is_demo_login("", ""));
    }
}
