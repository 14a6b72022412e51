//! Item Store
//!
//! Persists the whole collection as one JSON array under a single key.
//! Reads fail soft to an empty collection; every save rewrites the full blob.

use log::{debug, warn};
use serde_json::Value;

use super::traits::KeyValueStore;
use crate::config::AppConfig;
use crate::domain::{DomainResult, Item};

pub struct ItemStore<S> {
    backend: S,
    items_key: String,
    dark_mode_key: String,
}

impl<S: KeyValueStore> ItemStore<S> {
    pub fn new(backend: S, config: &AppConfig) -> Self {
        Self {
            backend,
            items_key: config.items_key.clone(),
            dark_mode_key: config.dark_mode_key.clone(),
        }
    }

    /// Load the stored collection.
    ///
    /// An absent blob, or one that is not a JSON array, yields an empty
    /// collection. Records that don't parse are skipped individually.
    pub fn load(&self) -> Vec<Item> {
        let Some(raw) = self.backend.get(&self.items_key) else {
            debug!("no stored items under '{}'", self.items_key);
            return Vec::new();
        };
        let records = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    "stored items under '{}' are unreadable, starting empty: {}",
                    self.items_key, e
                );
                return Vec::new();
            }
        };

        let total = records.len();
        let items: Vec<Item> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<Item>(record) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!("skipping stored record {}: {}", index, e);
                    None
                }
            })
            .collect();
        debug!("loaded {} of {} stored items", items.len(), total);
        items
    }

    /// Overwrite the stored collection
    pub fn save(&self, items: &[Item]) -> DomainResult<()> {
        let json = serde_json::to_string(items)?;
        self.backend.set(&self.items_key, &json)?;
        debug!("saved {} items ({} bytes)", items.len(), json.len());
        Ok(())
    }

    pub fn load_dark_mode(&self) -> bool {
        self.backend
            .get(&self.dark_mode_key)
            .and_then(|raw| serde_json::from_str::<bool>(&raw).ok())
            .unwrap_or(false)
    }

    pub fn save_dark_mode(&self, enabled: bool) -> DomainResult<()> {
        let json = serde_json::to_string(&enabled)?;
        self.backend.set(&self.dark_mode_key, &json)
    }
}
