//! Sweetshop Core - Shared domain types.
//!
//! This crate provides the types used across all Sweetshop components:
//! - `storefront` - Client-side cart, wishlist and session state
//! - `cli` - Command-line front end over the storefront stores
//!
//! # Architecture
//!
//! The core crate contains only types and their pure operations - no I/O,
//! no persistence, no logging. Invariants that belong to the data itself
//! (one cart line per product, positive quantities, one wishlist entry per
//! product) are enforced here so every consumer gets them for free.
//!
//! # Modules
//!
//! - [`types`] - Product ids, prices, products, carts, wishlists, users and orders

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
