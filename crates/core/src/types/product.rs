//! Catalog products as delivered by the product API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::ProductId;
use super::price::Price;

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RatingError {
    /// The value is outside `0..=5`.
    #[error("rating must be between 0 and {max} (got {value})")]
    OutOfRange {
        /// Rejected value.
        value: f64,
        /// Maximum allowed rating.
        max: f64,
    },
    /// The value is NaN.
    #[error("rating must be a number")]
    NotANumber,
}

/// A product's average review score on a 0 to 5 scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(f64);

impl Rating {
    /// Highest possible rating.
    pub const MAX: f64 = 5.0;

    /// Create a rating, rejecting values outside `0..=5`.
    ///
    /// # Errors
    ///
    /// Returns `RatingError` if the value is NaN or out of range.
    pub fn new(value: f64) -> Result<Self, RatingError> {
        if value.is_nan() {
            return Err(RatingError::NotANumber);
        }
        if !(0.0..=Self::MAX).contains(&value) {
            return Err(RatingError::OutOfRange {
                value,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// The rating value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Rating {
    type Error = RatingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// A product snapshot.
///
/// Only `id` is required on the wire. Fields the storefront does not model
/// (`description`, `stockQuantity`, `ingredients`, ...) are kept in `extra`
/// and written back unchanged, so a stored snapshot is never lossy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Create a product with a name and price and no other details.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: String::new(),
            category: String::new(),
            rating: None,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub const fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }
}
