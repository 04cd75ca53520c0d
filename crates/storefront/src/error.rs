//! Unified error type for storefront front ends.
//!
//! Store operations never fail; these errors come from the edges: opening
//! storage, reading configuration, and checkout validation.

use thiserror::Error;

use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Storage backend could not be opened or used.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Checkout was refused.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Input from the user could not be understood.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serializing output failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StorefrontError {
    /// Message suitable for showing to a shopper.
    ///
    /// Checkout and input errors are shown as-is; infrastructure failures
    /// are summarized so paths and internals stay out of the UI.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Checkout(err) => err.to_string(),
            Self::InvalidInput(msg) => msg.clone(),
            Self::Storage(_) => "Could not access saved data".to_string(),
            Self::Config(_) | Self::Serialization(_) => "Internal error".to_string(),
        }
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = StorefrontError::InvalidInput("quantity must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid input: quantity must be positive");

        let err = StorefrontError::from(CheckoutError::EmptyCart);
        assert_eq!(err.to_string(), "Checkout error: Your cart is empty");
    }

    #[test]
    fn test_user_message_hides_internals() {
        let err = StorefrontError::from(StorageError::InvalidKey("../x".to_string()));
        assert_eq!(err.user_message(), "Could not access saved data");

        let err = StorefrontError::from(CheckoutError::NotSignedIn);
        assert_eq!(err.user_message(), "Please login to proceed to checkout");
    }
}
