//! Client-side state stores.
//!
//! Each store is constructed explicitly with a storage handle and a
//! notifier, hydrates once at construction, and persists after every
//! mutation. There is no global state: whatever drives the UI owns the
//! stores and passes them where they are needed.

pub mod cart;
pub mod session;
pub mod wishlist;

pub use cart::{CartStore, QuantityChange};
pub use session::SessionStore;
pub use wishlist::WishlistStore;
