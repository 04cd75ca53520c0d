//! Core types for Sweetshop.
//!
//! This module provides type-safe wrappers for the storefront's domain concepts.

pub mod cart;
pub mod email;
pub mod id;
pub mod order;
pub mod price;
pub mod product;
pub mod user;
pub mod wishlist;

pub use cart::{AddOutcome, Cart, CartLineItem};
pub use email::{Email, EmailError};
pub use id::ProductId;
pub use order::{OrderItem, OrderRequest, PaymentMethod, ShippingAddress};
pub use price::{CurrencyCode, Price, UnknownCurrency};
pub use product::{Product, Rating, RatingError};
pub use user::UserProfile;
pub use wishlist::Wishlist;
