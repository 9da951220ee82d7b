//! Demo records behind the back-office pages.
//!
//! Everything here is static; there is no database. Each module exposes its
//! records plus the filter functions the list pages use.

pub mod content;
pub mod customers;
pub mod fulfillment;
pub mod inventory;
pub mod marketing;
pub mod orders;
