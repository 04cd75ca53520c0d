//! Wishlist state store.

use sweetshop_core::{AddOutcome, Product, ProductId, Wishlist};
use tracing::instrument;

use super::cart::CartStore;
use crate::notify::{Notification, Notifier, TracingNotifier};
use crate::storage::{self, KeyValueStore, keys};

/// Owns the wishlist for one storefront session.
///
/// Hydrates once from the `wishlist` key and rewrites it after every change.
#[derive(Debug)]
pub struct WishlistStore<S, N = TracingNotifier> {
    wishlist: Wishlist,
    storage: S,
    notifier: N,
}

impl<S: KeyValueStore, N: Notifier> WishlistStore<S, N> {
    /// Create the store from whatever is persisted under the `wishlist` key.
    pub fn hydrate(storage: S, notifier: N) -> Self {
        let wishlist: Wishlist = storage::load_json(&storage, keys::WISHLIST).unwrap_or_default();
        tracing::debug!(entries = wishlist.len(), "Hydrated wishlist");
        Self {
            wishlist,
            storage,
            notifier,
        }
    }

    /// Save a snapshot of `product`.
    ///
    /// Returns `false` without changing anything if the product is already
    /// wishlisted.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_wishlist(&mut self, product: &Product) -> bool {
        if !self.wishlist.insert(product) {
            self.notifier.notify(Notification::AlreadyInWishlist);
            return false;
        }
        self.persist();
        self.notifier.notify(Notification::AddedToWishlist);
        true
    }

    /// Remove the entry for `id`.
    ///
    /// Notifies "Removed from wishlist" whether or not the product was
    /// wishlisted. Storage is only rewritten when an entry was removed.
    #[instrument(skip(self))]
    pub fn remove_from_wishlist(&mut self, id: ProductId) -> Option<Product> {
        let removed = self.wishlist.remove(id);
        if removed.is_some() {
            self.persist();
        } else {
            tracing::debug!("Product was not wishlisted");
        }
        self.notifier.notify(Notification::RemovedFromWishlist);
        removed
    }

    /// Wishlist `product` if it is not, unwishlist it if it is.
    ///
    /// Returns whether the product is wishlisted afterwards.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.is_in_wishlist(product.id) {
            self.remove_from_wishlist(product.id);
            false
        } else {
            self.add_to_wishlist(product)
        }
    }

    /// Put one unit of a wishlisted product into `cart`.
    ///
    /// The entry stays on the wishlist. Returns `None` if `id` is not
    /// wishlisted.
    pub fn move_to_cart<CS, CN>(
        &self,
        id: ProductId,
        cart: &mut CartStore<CS, CN>,
    ) -> Option<AddOutcome>
    where
        CS: KeyValueStore,
        CN: Notifier,
    {
        let product = self.wishlist.get(id)?;
        Some(cart.add_one(product))
    }

    #[must_use]
    pub fn is_in_wishlist(&self, id: ProductId) -> bool {
        self.wishlist.contains(id)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.wishlist.len()
    }

    #[must_use]
    pub fn items(&self) -> &[Product] {
        self.wishlist.entries()
    }

    #[must_use]
    pub const fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// Write the current wishlist to storage.
    pub fn flush(&self) -> bool {
        self.persist()
    }

    fn persist(&self) -> bool {
        storage::save_json(&self.storage, keys::WISHLIST, &self.wishlist)
    }
}
