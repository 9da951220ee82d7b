//! Session-scoped models for the admin console.

pub mod session;

pub use graphphile_core::{Flash, FlashLevel};
pub use session::{CurrentAdmin, keys as session_keys};
