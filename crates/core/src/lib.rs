//! Graphphile Core - Shared domain library.
//!
//! This crate provides the types and logic used across all Graphphile components:
//! - `storefront` - Public-facing store
//! - `admin` - Back-office console
//! - `cli` - Command-line export and inspection tools
//!
//! # Architecture
//!
//! The core crate contains no HTTP, no sessions and no network clients. Cart
//! persistence is expressed through the [`cart::CartStore`] trait so each binary
//! can decide where the serialized cart lives.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for prices, emails and statuses
//! - [`catalog`] - The static product and collection catalog with filtering
//! - [`cart`] - The cart state container and its persistence seam

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod types;

pub use cart::{
    AddOptions, CART_STORAGE_KEY, Cart, CartItem, CartStore, MemoryCartStore, PersistentCart,
};
pub use catalog::{Collection, Color, Product, ProductQuery, ProductSort};
pub use types::*;
