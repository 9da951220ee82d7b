//! Session-scoped models for the storefront.

pub mod session;

pub use graphphile_core::{Flash, FlashLevel};
pub use session::{CurrentCustomer, keys as session_keys};
