//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for the storage backend.
//! Implementations can use browser local storage, in-memory maps, etc.

use crate::domain::DomainResult;

/// Synchronous string key-value storage.
///
/// Writes overwrite the whole value; there are no transactions.
pub trait KeyValueStore {
    /// Read a value, `None` if the key is absent or the backend is unavailable
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> DomainResult<()>;

    /// Delete a key
    fn remove(&self, key: &str) -> DomainResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        (**self).remove(key)
    }
}
