//! Durable key-value byte storage for client state.
//!
//! The storefront keeps its state under a handful of logical keys (see
//! [`keys`]). Each key holds one complete document that is overwritten on
//! every change; there is no append log and no incremental diffing.
//!
//! # Failure policy
//!
//! Backends report failures through [`StorageError`], but the stores never
//! pass them on to their callers:
//!
//! - [`load_json`] fails open: absent, unreadable or unparseable bytes yield
//!   `None` and a `warn!` log.
//! - [`save_json`] is best-effort: a rejected write is logged and reported as
//!   `false`. The in-memory state stays authoritative and the next successful
//!   write brings storage back in line.

mod file;
mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage keys used by the storefront.
pub mod keys {
    /// JSON array of cart line items.
    pub const CART: &str = "cart";

    /// JSON array of wishlisted product snapshots.
    pub const WISHLIST: &str = "wishlist";

    /// JSON document of the signed-in user.
    pub const USER: &str = "user";

    /// Raw bearer token of the signed-in user.
    pub const TOKEN: &str = "token";
}

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying medium failed.
    #[error("storage I/O error for key {key:?}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The key cannot be mapped onto the medium.
    #[error("invalid storage key {0:?}: use letters, digits, '-' or '_'")]
    InvalidKey(String),

    /// The write would exceed the backend's capacity.
    #[error("storage quota exceeded writing {key:?}: {needed} bytes needed, {available} available")]
    QuotaExceeded {
        key: String,
        needed: usize,
        available: usize,
    },
}

/// A durable map from logical keys to byte documents.
///
/// Implementations take `&self`: the storefront runs single-threaded and
/// several stores share one backend by cloning a handle to it.
pub trait KeyValueStore {
    /// Read the document stored under `key`, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the medium cannot be read.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the medium rejects the write.
    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;

    /// Delete the document stored under `key`. Deleting a missing key is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the medium rejects the delete.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Load and parse the JSON document under `key`, failing open.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let bytes = match store.load(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read stored state, starting empty");
            return None;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding unparseable stored state");
            None
        }
    }
}

/// Serialize `value` as JSON and write it under `key`, best-effort.
///
/// Returns `true` if the write succeeded.
pub fn save_json<T: Serialize + ?Sized>(store: &impl KeyValueStore, key: &str, value: &T) -> bool {
    let bytes = match serde_json::to_vec(value) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to serialize state");
            return false;
        }
    };

    match store.save(key, &bytes) {
        Ok(()) => {
            tracing::trace!(key, bytes = bytes.len(), "Persisted state");
            true
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to persist state");
            false
        }
    }
}

/// Check that a key is safe to use as a file name on any platform.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("cart").is_ok());
        assert!(validate_key("wish_list-2").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("a b").is_err());
    }

    #[test]
    fn test_load_json_absent_is_none() {
        let store = MemoryStore::new();
        assert!(load_json::<Vec<i32>>(&store, keys::CART).is_none());
    }

    #[test]
    fn test_load_json_fails_open_on_garbage() {
        let store = MemoryStore::new();
        store.save(keys::CART, b"{not json").unwrap();
        assert!(load_json::<Vec<i32>>(&store, keys::CART).is_none());
    }

    #[test]
    fn test_save_then_load_json() {
        let store = MemoryStore::new();
        assert!(save_json(&store, keys::WISHLIST, &[1, 2, 3]));
        assert_eq!(
            load_json::<Vec<i32>>(&store, keys::WISHLIST),
            Some(vec![1, 2, 3])
        );
    }

    #[test]
    fn test_save_json_reports_rejected_write() {
        let store = MemoryStore::with_quota(4);
        assert!(!save_json(&store, keys::CART, &"far too long for the quota"));
        assert!(store.load(keys::CART).unwrap().is_none());
    }
}
