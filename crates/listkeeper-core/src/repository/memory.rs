//! In-memory key-value store used by tests and host-side tools.

use std::collections::HashMap;
use std::sync::Mutex;

use super::traits::KeyValueStore;
use crate::domain::{DomainError, DomainResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    writes: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one key
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }

    /// Number of successful `set` calls
    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|w| *w).unwrap_or(0)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        if let Ok(mut writes) = self.writes.lock() {
            *writes += 1;
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        values.remove(key);
        Ok(())
    }
}
