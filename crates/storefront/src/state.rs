//! Storefront session state.

use crate::notify::Notifier;
use crate::storage::KeyValueStore;
use crate::stores::{CartStore, SessionStore, WishlistStore};

/// All client-side state for one storefront session.
///
/// Constructed once with [`Storefront::open`], which hydrates every store
/// from the shared storage backend, and torn down with
/// [`Storefront::close`], which flushes them. Whatever drives the UI owns
/// this value and lends out the stores it needs.
#[derive(Debug)]
pub struct Storefront<S, N> {
    pub cart: CartStore<S, N>,
    pub wishlist: WishlistStore<S, N>,
    pub session: SessionStore<S, N>,
    notifier: N,
}

impl<S, N> Storefront<S, N>
where
    S: KeyValueStore + Clone,
    N: Notifier + Clone,
{
    /// Hydrate the cart, wishlist and session from `storage`.
    pub fn open(storage: S, notifier: N) -> Self {
        let cart = CartStore::hydrate(storage.clone(), notifier.clone());
        let wishlist = WishlistStore::hydrate(storage.clone(), notifier.clone());
        let session = SessionStore::hydrate(storage, notifier.clone());

        tracing::debug!(
            cart_units = cart.count(),
            wishlist_entries = wishlist.count(),
            signed_in = session.is_authenticated(),
            "Storefront state opened"
        );
        Self {
            cart,
            wishlist,
            session,
            notifier,
        }
    }

    /// The notifier shared by all stores.
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Flush the cart and wishlist one last time.
    ///
    /// Returns `true` if both writes succeeded.
    pub fn close(self) -> bool {
        let cart = self.cart.flush();
        let wishlist = self.wishlist.flush();
        tracing::debug!(cart, wishlist, "Storefront state closed");
        cart && wishlist
    }
}
