//! Integration tests for Sweetshop.
//!
//! The tests under `tests/` drive the storefront stores end to end against
//! both storage backends. This library holds the shared fixtures.
//!
//! # Test Categories
//!
//! - `storefront_cart` - Cart behaviour and persistence scenarios
//! - `storefront_wishlist` - Wishlist behaviour and move-to-cart
//! - `storefront_persistence` - File-backed restarts, corrupt data, quota
//! - `storefront_checkout` - Order summary and order request assembly

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::num::NonZeroU32;

use secrecy::SecretString;
use sweetshop_core::{Price, Product, ProductId, UserProfile};
use sweetshop_storefront::Storefront;
use sweetshop_storefront::notify::RecordingNotifier;
use sweetshop_storefront::storage::{FileStore, KeyValueStore, MemoryStore};
use tempfile::TempDir;

/// A product with the given id and whole-unit price.
#[must_use]
pub fn product(id: i64, price: i64) -> Product {
    Product::new(ProductId::new(id), format!("Sweet {id}"), Price::from_units(price))
}

/// Shorthand for a non-zero quantity in tests.
///
/// # Panics
///
/// Panics if `n` is zero.
#[must_use]
pub fn qty(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap_or_else(|| panic!("quantity must be non-zero"))
}

#[must_use]
pub fn shopper() -> UserProfile {
    UserProfile::new("u-100", "Kavya Raman", "kavya@example.in").with_phone("9445512345")
}

/// Storefront state over an in-memory store, with the store and notifier
/// handles kept for inspection.
pub struct MemoryHarness {
    pub state: Storefront<MemoryStore, RecordingNotifier>,
    pub storage: MemoryStore,
    pub notifier: RecordingNotifier,
}

impl MemoryHarness {
    #[must_use]
    pub fn new() -> Self {
        Self::with_storage(MemoryStore::new())
    }

    #[must_use]
    pub fn with_storage(storage: MemoryStore) -> Self {
        let notifier = RecordingNotifier::new();
        let state = Storefront::open(storage.clone(), notifier.clone());
        Self {
            state,
            storage,
            notifier,
        }
    }

    /// Open a second storefront over the same storage, as a page reload would.
    #[must_use]
    pub fn reload(&self) -> Self {
        Self::with_storage(self.storage.clone())
    }

    /// Raw bytes stored under `key`, if any.
    ///
    /// # Panics
    ///
    /// Panics if the store rejects the read.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.storage
            .load(key)
            .unwrap_or_else(|e| panic!("failed to read {key}: {e}"))
    }

    pub fn sign_in(&mut self) {
        self.state
            .session
            .sign_in(shopper(), SecretString::from("test-token"));
    }
}

impl Default for MemoryHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// A temporary data directory for file-backed tests. Removed on drop.
pub struct DataDir {
    dir: TempDir,
}

impl DataDir {
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap_or_else(|e| panic!("failed to create temp dir: {e}"));
        Self { dir }
    }

    /// Open a fresh storefront over this directory, as a restart would.
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be opened as a store.
    #[must_use]
    pub fn open(&self) -> Storefront<FileStore, RecordingNotifier> {
        Storefront::open(self.store(), RecordingNotifier::new())
    }

    /// # Panics
    ///
    /// Panics if the directory cannot be opened as a store.
    #[must_use]
    pub fn store(&self) -> FileStore {
        FileStore::open(self.dir.path()).unwrap_or_else(|e| panic!("failed to open store: {e}"))
    }

    /// Raw bytes stored under `key`, if any.
    ///
    /// # Panics
    ///
    /// Panics if the store cannot be read.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.store()
            .load(key)
            .unwrap_or_else(|e| panic!("failed to read {key}: {e}"))
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }
}

impl Default for DataDir {
    fn default() -> Self {
        Self::new()
    }
}
