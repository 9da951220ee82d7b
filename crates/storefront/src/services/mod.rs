//! Storefront services.

pub mod cart;

pub use cart::SessionCartStore;
