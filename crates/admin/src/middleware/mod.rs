//! HTTP middleware and extractors for admin.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request tracing with status and latency)
//! 3. Security headers (stricter than the storefront)
//! 4. Session layer (tower-sessions with in-memory store)
//!
//! # Extractors
//!
//! - [`RequireAdminAuth`] / [`OptionalAdminAuth`] - signed-in admin
//! - [`AdminPage`] - layout data; also requires a signed-in admin

pub mod auth;
pub mod flash;
pub mod page;
pub mod security_headers;
pub mod session;

pub use auth::{
    OptionalAdminAuth, RequireAdminAuth, clear_current_admin, current_admin, set_current_admin,
};
pub use flash::{set_flash, take_flash};
pub use page::{AdminPage, AdminUserView};
pub use security_headers::security_header_layers;
pub use session::create_session_layer;
