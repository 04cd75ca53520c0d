//! The wishlist collection.

use serde::{Deserialize, Serialize, Serializer};

use super::id::ProductId;
use super::product::Product;

/// Products saved for later, unique by id, in the order they were added.
///
/// Each entry is a full [`Product`] snapshot taken when it was wishlisted,
/// not a reference into the catalog.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Vec<Product>")]
pub struct Wishlist {
    entries: Vec<Product>,
}

impl Wishlist {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a snapshot of `product`.
    ///
    /// Returns `false` and leaves the wishlist untouched if the product is
    /// already present. Duplicates are rejected, never merged.
    pub fn insert(&mut self, product: &Product) -> bool {
        if self.contains(product.id) {
            return false;
        }
        self.entries.push(product.clone());
        true
    }

    /// Remove the entry for `id`, returning it if it was present.
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    #[must_use]
    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<Product>> for Wishlist {
    /// Build a wishlist from raw snapshots, keeping the first of any
    /// duplicate ids.
    fn from(products: Vec<Product>) -> Self {
        let mut wishlist = Self::new();
        for product in &products {
            wishlist.insert(product);
        }
        wishlist
    }
}

impl Serialize for Wishlist {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Price;

    fn product(id: i64) -> Product {
        Product::new(ProductId::new(id), format!("Sweet {id}"), Price::from_units(10))
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut wishlist = Wishlist::new();
        assert!(wishlist.insert(&product(5)));
        assert!(!wishlist.insert(&product(5)));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_duplicate_insert_does_not_replace_snapshot() {
        let mut wishlist = Wishlist::new();
        wishlist.insert(&product(5));

        let mut renamed = product(5);
        renamed.name = "Renamed".to_string();
        wishlist.insert(&renamed);

        assert_eq!(wishlist.get(ProductId::new(5)).unwrap().name, "Sweet 5");
    }

    #[test]
    fn test_remove_and_contains() {
        let mut wishlist = Wishlist::new();
        wishlist.insert(&product(1));
        wishlist.insert(&product(2));

        assert!(wishlist.contains(ProductId::new(1)));
        assert!(wishlist.remove(ProductId::new(1)).is_some());
        assert!(!wishlist.contains(ProductId::new(1)));
        assert!(wishlist.remove(ProductId::new(1)).is_none());
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_deserialize_drops_duplicate_ids() {
        let json = r#"[{"id": 1, "name": "A"}, {"id": 2}, {"id": 1, "name": "B"}]"#;
        let wishlist: Wishlist = serde_json::from_str(json).unwrap();

        assert_eq!(wishlist.len(), 2);
        assert_eq!(wishlist.get(ProductId::new(1)).unwrap().name, "A");
    }

    #[test]
    fn test_serializes_as_json_array_of_products() {
        let mut wishlist = Wishlist::new();
        wishlist.insert(&product(9));

        let json = serde_json::to_value(&wishlist).unwrap();
        assert_eq!(json[0]["id"], 9);
        assert!(json[0].get("quantity").is_none());
    }
}
