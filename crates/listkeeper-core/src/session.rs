//! List Session
//!
//! Owns the in-memory collection and the store it persists to.
//! Every confirmed mutation is reduced and then written through in full.

use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::domain::{DomainResult, Item};
use crate::reducer::{reduce, IdGenerator, ItemAction, PendingAction};
use crate::repository::{run_startup_migration, ItemStore, KeyValueStore};
use crate::view::{ListQuery, ListView};

pub struct ListSession<S> {
    store: ItemStore<S>,
    items: Vec<Item>,
    ids: IdGenerator,
}

impl<S: KeyValueStore> ListSession<S> {
    /// Load the stored collection and run the one-time migration pass
    pub fn open(backend: S, config: &AppConfig, now: DateTime<Utc>) -> Self {
        let store = ItemStore::new(backend, config);
        let loaded = store.load();
        let items = match run_startup_migration(&store, loaded.clone(), now, &config.unknown_author) {
            Ok((items, report)) => {
                debug!("startup migration: {:?}", report);
                items
            }
            Err(e) => {
                warn!("migration could not be saved, continuing with loaded items: {}", e);
                loaded
            }
        };
        info!("session opened with {} items", items.len());

        Self {
            ids: IdGenerator::seeded_from(&items),
            store,
            items,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn view(&self, query: &ListQuery) -> ListView {
        ListView::derive(&self.items, query)
    }

    /// Apply a confirmed pending change
    pub fn confirm(&mut self, pending: PendingAction, now: DateTime<Utc>) -> DomainResult<()> {
        let action = pending.into_action(&mut self.ids, now);
        self.dispatch(action)
    }

    /// Reduce and persist.
    ///
    /// A rejected action leaves state untouched. A failed write keeps the
    /// new in-memory state and returns the error.
    pub fn dispatch(&mut self, action: ItemAction) -> DomainResult<()> {
        self.items = reduce(&self.items, action)?;
        if let Err(e) = self.store.save(&self.items) {
            error!("failed to persist items: {}", e);
            return Err(e);
        }
        Ok(())
    }

    pub fn dark_mode(&self) -> bool {
        self.store.load_dark_mode()
    }

    pub fn set_dark_mode(&self, enabled: bool) -> DomainResult<()> {
        self.store.save_dark_mode(enabled)
    }
}
