//! Cart line items and the cart collection.
//!
//! [`Cart`] is a plain value with no I/O. It owns two invariants:
//!
//! - at most one line per [`ProductId`]
//! - every line has a quantity of at least one
//!
//! The second is carried by the type system (`NonZeroU32`), the first by
//! funnelling every mutation, including deserialization, through methods
//! that merge on id.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize, Serializer};

use super::id::ProductId;
use super::price::Price;
use super::product::Product;

const QUANTITY_KEY: &str = "quantity";

/// A product snapshot plus the quantity of it held in the cart.
///
/// Serialized flat, as the product's own fields with a `quantity` key added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: NonZeroU32,
}

impl CartLineItem {
    /// Create a line for a product snapshot.
    ///
    /// A `quantity` field carried in the product's unmodelled fields is
    /// dropped; the line's own quantity owns that key on the wire.
    #[must_use]
    pub fn new(mut product: Product, quantity: NonZeroU32) -> Self {
        product.extra.remove(QUANTITY_KEY);
        Self { product, quantity }
    }

    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price captured when the line was first added.
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        self.product.price
    }

    /// `unit_price * quantity`.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.product.price.times(self.quantity.get())
    }
}

/// What [`Cart::add`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended.
    Inserted,
    /// The product was already in the cart; its quantity grew to `quantity`.
    Merged {
        /// Quantity of the line after the merge.
        quantity: NonZeroU32,
    },
}

/// An insertion-ordered sequence of cart lines, unique by product id.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Vec<CartLineItem>")]
pub struct Cart {
    lines: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add `quantity` units of `product`.
    ///
    /// If the product already has a line, the existing snapshot is kept and
    /// only its quantity grows (saturating at `u32::MAX`). Otherwise a new
    /// line is appended at the end.
    pub fn add(&mut self, product: &Product, quantity: NonZeroU32) -> AddOutcome {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(quantity.get());
            return AddOutcome::Merged {
                quantity: line.quantity,
            };
        }

        self.lines.push(CartLineItem::new(product.clone(), quantity));
        AddOutcome::Inserted
    }

    /// Remove the line for `id`, returning it if it was present.
    pub fn remove(&mut self, id: ProductId) -> Option<CartLineItem> {
        let index = self.lines.iter().position(|line| line.id() == id)?;
        Some(self.lines.remove(index))
    }

    /// Replace the quantity of the line for `id`.
    ///
    /// Returns `false` if the product is not in the cart.
    pub fn set_quantity(&mut self, id: ProductId, quantity: NonZeroU32) -> bool {
        self.line_mut(id).is_some_and(|line| {
            line.quantity = quantity;
            true
        })
    }

    /// Remove every line, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let removed = self.lines.len();
        self.lines.clear();
        removed
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLineItem::subtotal).sum()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity.get()))
            .sum()
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.lines.iter().find(|line| line.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLineItem> {
        self.lines.iter_mut().find(|line| line.id() == id)
    }
}

impl From<Vec<CartLineItem>> for Cart {
    /// Build a cart from raw lines, merging any duplicate ids into the first
    /// occurrence.
    fn from(lines: Vec<CartLineItem>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            cart.add(&line.product, line.quantity);
        }
        cart
    }
}

impl Serialize for Cart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.lines.serialize(serializer)
    }
}
