//! Sweetshop Storefront library.
//!
//! Client-side state for the storefront: the cart, the wishlist and the
//! signed-in session, each kept in memory and mirrored to a durable
//! key-value byte store so it survives restarts.
//!
//! # Modules
//!
//! - [`storage`] - `KeyValueStore` trait with file and in-memory backends
//! - [`stores`] - `CartStore`, `WishlistStore` and `SessionStore`
//! - [`state`] - `Storefront`, the bundle of stores for one session
//! - [`checkout`] - Order summary and order request assembly
//! - [`notify`] - User-facing notifications
//! - [`config`] - Environment configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkout;
pub mod config;
pub mod error;
pub mod notify;
pub mod state;
pub mod storage;
pub mod stores;

pub use error::{Result, StorefrontError};
pub use state::Storefront;
