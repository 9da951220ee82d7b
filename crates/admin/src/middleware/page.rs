//! Layout data for every signed-in console page.

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::request::Parts,
};
use tower_sessions::Session;

use crate::middleware::auth::{AdminAuthRejection, RequireAdminAuth};
use crate::middleware::flash::take_flash;
use crate::models::{CurrentAdmin, Flash};
use crate::state::AppState;

/// Admin user info for the sidebar.
#[derive(Debug, Clone)]
pub struct AdminUserView {
    pub name: String,
    pub username: String,
}

impl From<&CurrentAdmin> for AdminUserView {
    fn from(admin: &CurrentAdmin) -> Self {
        Self {
            name: admin.name.clone(),
            username: admin.username.clone(),
        }
    }
}

/// Sidebar, header and flash data for the console layout.
///
/// Extracting it requires a signed-in admin, so a handler that takes an
/// `AdminPage` is protected the same way as one taking
/// [`RequireAdminAuth`].
#[derive(Debug, Clone)]
pub struct AdminPage {
    pub admin_user: AdminUserView,
    /// Full request path (before any nesting), for highlighting the sidebar.
    pub current_path: String,
    /// Flash message to show on this render.
    pub flash: Option<Flash>,
    /// Storefront link in the sidebar footer.
    pub storefront_url: String,
}

impl AdminPage {
    /// Whether the sidebar link for `href` is the current section.
    #[must_use]
    pub fn is_active(&self, href: &str) -> bool {
        if href == "/" {
            return self.current_path == "/";
        }
        self.current_path == href
            || self
                .current_path
                .strip_prefix(href)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

impl FromRequestParts<AppState> for AdminPage {
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireAdminAuth(admin) = RequireAdminAuth::from_request_parts(parts, state).await?;

        let flash = match parts.extensions.get::<Session>() {
            Some(session) => take_flash(session).await,
            None => None,
        };

        Ok(Self {
            admin_user: AdminUserView::from(&admin),
            current_path: parts
                .extensions
                .get::<OriginalUri>()
                .map_or_else(|| parts.uri.path(), |uri| uri.path())
                .to_string(),
            flash,
            storefront_url: state.config().storefront_url.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(path: &str) -> AdminPage {
        AdminPage {
            admin_user: AdminUserView::from(&CurrentAdmin::demo("admin")),
            current_path: path.to_string(),
            flash: None,
            storefront_url: String::new(),
        }
    }

    #[test]
    fn test_is_active_matches_section_prefix() {
        assert!(page("/").is_active("/"));
        assert!(!page("/orders").is_active("/"));
        assert!(page("/orders/ORD123456").is_active("/orders"));
        assert!(page("/content/blog").is_active("/content/blog"));
        assert!(!page("/content/blog").is_active("/content/banners"));
        assert!(!page("/products-archive").is_active("/products"));
    }
}
