//! Account route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::filters;
use crate::middleware::{PageChrome, RequireAuth};
use crate::models::CurrentCustomer;
use crate::seo::Seo;

/// Account page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/index.html")]
pub struct AccountTemplate {
    pub chrome: PageChrome,
    pub seo: Seo,
    pub customer: CurrentCustomer,
}

/// Display the account page.
#[instrument(skip(chrome, customer), fields(customer_id = %customer.id))]
pub async fn index(RequireAuth(customer): RequireAuth, chrome: PageChrome) -> impl IntoResponse {
    AccountTemplate {
        chrome,
        seo: Seo::new("My Account", "Your Graphphile account.").noindex(),
        customer,
    }
}
