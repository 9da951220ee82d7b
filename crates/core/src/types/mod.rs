//! Core types for Graphphile.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod flash;
pub mod price;
pub mod status;

pub use email::{Email, EmailError};
pub use flash::{Flash, FlashLevel};
pub use price::Price;
pub use status::*;
