//! In-process storage backend.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{KeyValueStore, StorageError, validate_key};

/// A shared in-memory key-value store.
///
/// Clones share the same map, the way every part of a page shares one
/// browser storage area. An optional byte quota over all stored documents
/// models a medium that refuses writes once full.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, Vec<u8>>,
    quota: Option<usize>,
}

impl Inner {
    fn used_excluding(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(_, v)| v.len())
            .sum()
    }
}

impl MemoryStore {
    /// Create an empty store with no quota.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that holds at most `bytes` bytes in total.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        let store = Self::new();
        store.set_quota(Some(bytes));
        store
    }

    /// Change the quota. Documents already stored are kept even if they
    /// exceed the new limit.
    pub fn set_quota(&self, bytes: Option<usize>) {
        self.inner.borrow_mut().quota = bytes;
    }

    /// Total bytes currently stored.
    #[must_use]
    pub fn used(&self) -> usize {
        self.inner.borrow().entries.values().map(Vec::len).sum()
    }

    /// Stored keys, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.inner.borrow().entries.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        validate_key(key)?;
        Ok(self.inner.borrow().entries.get(key).cloned())
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut inner = self.inner.borrow_mut();

        if let Some(quota) = inner.quota {
            let available = quota.saturating_sub(inner.used_excluding(key));
            if bytes.len() > available {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_owned(),
                    needed: bytes.len(),
                    available,
                });
            }
        }

        inner.entries.insert(key.to_owned(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.inner.borrow_mut().entries.remove(key);
        Ok(())
    }
}
