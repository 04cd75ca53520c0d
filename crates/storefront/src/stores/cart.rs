//! Cart state store.

use std::num::NonZeroU32;

use sweetshop_core::{AddOutcome, Cart, CartLineItem, Price, Product, ProductId};
use tracing::instrument;

use crate::notify::{Notification, Notifier, TracingNotifier};
use crate::storage::{self, KeyValueStore, keys};

/// Result of [`CartStore::update_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line now holds exactly the requested quantity.
    Updated,
    /// The requested quantity was below one, so the line was removed.
    Removed,
    /// The product is not in the cart; nothing changed.
    NotInCart,
}

/// Owns the cart for one storefront session.
///
/// Built with [`CartStore::hydrate`], which reads the `cart` key once.
/// Every mutating method that changes the cart rewrites the whole `cart`
/// document before returning.
#[derive(Debug)]
pub struct CartStore<S, N = TracingNotifier> {
    cart: Cart,
    storage: S,
    notifier: N,
}

impl<S: KeyValueStore, N: Notifier> CartStore<S, N> {
    /// Create the store from whatever is persisted under the `cart` key.
    ///
    /// Missing or unparseable state yields an empty cart.
    pub fn hydrate(storage: S, notifier: N) -> Self {
        let cart: Cart = storage::load_json(&storage, keys::CART).unwrap_or_default();
        tracing::debug!(
            lines = cart.len(),
            units = cart.count(),
            "Hydrated cart"
        );
        Self {
            cart,
            storage,
            notifier,
        }
    }

    /// Add `quantity` units of `product`.
    ///
    /// A product already in the cart keeps its original snapshot (name,
    /// price, image) and only gains quantity.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_cart(&mut self, product: &Product, quantity: NonZeroU32) -> AddOutcome {
        let outcome = self.cart.add(product, quantity);
        self.persist();

        match outcome {
            AddOutcome::Inserted => self.notifier.notify(Notification::AddedToCart),
            AddOutcome::Merged { .. } => self.notifier.notify(Notification::CartUpdated),
        }
        tracing::debug!(?outcome, "Added to cart");
        outcome
    }

    /// Add a single unit of `product`.
    pub fn add_one(&mut self, product: &Product) -> AddOutcome {
        self.add_to_cart(product, NonZeroU32::MIN)
    }

    /// Remove the line for `id`. Removing a product that is not in the cart
    /// changes nothing.
    #[instrument(skip(self))]
    pub fn remove_from_cart(&mut self, id: ProductId) -> Option<CartLineItem> {
        let removed = self.cart.remove(id);
        if removed.is_some() {
            self.persist();
        }
        self.notifier.notify(Notification::RemovedFromCart);
        removed
    }

    /// Set the quantity of the line for `id` to exactly `quantity`.
    ///
    /// A quantity below one removes the line instead. Quantities beyond
    /// `u32::MAX` are clamped.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> QuantityChange {
        let Some(quantity) = u32::try_from(quantity.clamp(0, i64::from(u32::MAX)))
            .ok()
            .and_then(NonZeroU32::new)
        else {
            return match self.remove_from_cart(id) {
                Some(_) => QuantityChange::Removed,
                None => QuantityChange::NotInCart,
            };
        };

        if self.cart.set_quantity(id, quantity) {
            self.persist();
            QuantityChange::Updated
        } else {
            QuantityChange::NotInCart
        }
    }

    /// Empty the cart.
    #[instrument(skip(self))]
    pub fn clear_cart(&mut self) {
        let removed = self.cart.clear();
        self.persist();
        self.notifier.notify(Notification::CartCleared);
        tracing::debug!(removed, "Cleared cart");
    }

    /// Sum of `price * quantity` over all lines, using the prices captured
    /// when each product was added.
    #[must_use]
    pub fn total(&self) -> Price {
        self.cart.total()
    }

    /// Total units in the cart (not the number of lines).
    #[must_use]
    pub fn count(&self) -> u64 {
        self.cart.count()
    }

    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        self.cart.lines()
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.cart.get(id)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.cart.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Write the current cart to storage. Called at session teardown; every
    /// mutation already persists on its own.
    ///
    /// Returns `true` if the write succeeded.
    pub fn flush(&self) -> bool {
        self.persist()
    }

    fn persist(&self) -> bool {
        storage::save_json(&self.storage, keys::CART, &self.cart)
    }
}
