//! HTTP middleware and extractors for the storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, frame options, etc.)
//! 5. Session layer (tower-sessions with in-memory store)
//!
//! # Extractors
//!
//! - [`RequireAuth`] / [`OptionalAuth`] - signed-in customer
//! - [`SessionCart`] - the visitor's cart, loaded from the session
//! - [`PageChrome`] - header/footer data every full page needs

pub mod auth;
pub mod cart;
pub mod flash;
pub mod page;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::{OptionalAuth, RequireAuth, clear_current_customer, set_current_customer};
pub use cart::SessionCart;
pub use flash::{set_flash, take_flash};
pub use page::PageChrome;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
