//! Application Context
//!
//! Shared state provided via Leptos Context API.

use chrono::Utc;
use leptos::prelude::*;
use listkeeper_core::{Item, ItemCandidate, ItemDraft, ItemId, ListSession, PendingAction};

use crate::storage::BrowserStorage;
use crate::store::{store_set_items, AppStore};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Form being edited (None = form closed) - read
    pub form: ReadSignal<Option<ItemDraft>>,
    /// Form being edited - write
    set_form: WriteSignal<Option<ItemDraft>>,
    /// Change waiting for confirmation - read
    pub pending: ReadSignal<Option<PendingAction>>,
    /// Change waiting for confirmation - write
    set_pending: WriteSignal<Option<PendingAction>>,
    /// Owns the collection and writes it through to storage
    session: StoredValue<ListSession<BrowserStorage>>,
    store: AppStore,
}

impl AppContext {
    pub fn new(
        form: (ReadSignal<Option<ItemDraft>>, WriteSignal<Option<ItemDraft>>),
        pending: (ReadSignal<Option<PendingAction>>, WriteSignal<Option<PendingAction>>),
        session: StoredValue<ListSession<BrowserStorage>>,
        store: AppStore,
    ) -> Self {
        Self {
            form: form.0,
            set_form: form.1,
            pending: pending.0,
            set_pending: pending.1,
            session,
            store,
        }
    }

    /// Open a blank form
    pub fn open_add(&self) {
        self.set_form.set(Some(ItemDraft::new(Utc::now().date_naive())));
    }

    /// Open the form prefilled from an item
    pub fn open_edit(&self, item: &Item) {
        self.set_form.set(Some(ItemDraft::from_item(item)));
    }

    /// Discard the draft
    pub fn close_form(&self) {
        self.set_form.set(None);
    }

    /// Ask for confirmation before saving a validated form
    pub fn request_save(&self, candidate: ItemCandidate) {
        self.set_pending.set(Some(PendingAction::Save(candidate)));
    }

    /// Ask for confirmation before deleting
    pub fn request_delete(&self, id: ItemId) {
        self.set_pending.set(Some(PendingAction::Delete(id)));
    }

    pub fn cancel_pending(&self) {
        self.set_pending.set(None);
    }

    /// Apply the pending change, persist it, and refresh the list
    pub fn confirm_pending(&self) {
        let Some(pending) = self.pending.get_untracked() else {
            return;
        };
        let closes_form = matches!(pending, PendingAction::Save(_));

        let mut result = Ok(());
        self.session
            .update_value(|session| result = session.confirm(pending, Utc::now()));
        if let Err(e) = result {
            log::error!("change not applied cleanly: {}", e);
        }

        let items = self.session.with_value(|session| session.items().to_vec());
        store_set_items(&self.store, items);
        if closes_form {
            self.close_form();
        }
        self.set_pending.set(None);
    }

    /// Persist the theme preference
    pub fn save_dark_mode(&self, enabled: bool) {
        let result = self.session.with_value(|session| session.set_dark_mode(enabled));
        if let Err(e) = result {
            log::warn!("theme preference not saved: {}", e);
        }
    }
}
