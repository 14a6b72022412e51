//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use listkeeper_core::{Item, ListQuery, SortKey, SortOrder};
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The full collection, mirrored from the session after every change
    pub items: Vec<Item>,
    /// Search box text
    pub search: String,
    /// Active sort order
    pub sort: SortOrder,
    /// Dark theme enabled
    pub dark_mode: bool,
}

impl AppState {
    pub fn new(items: Vec<Item>, dark_mode: bool) -> Self {
        Self {
            items,
            dark_mode,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the mirrored collection
pub fn store_set_items(store: &AppStore, items: Vec<Item>) {
    *store.items().write() = items;
}

/// Current search and sort as a pipeline query
pub fn store_query(store: &AppStore) -> ListQuery {
    ListQuery::new(store.search().get(), store.sort().get())
}

/// Flip or switch the sort key
pub fn store_toggle_sort(store: &AppStore, key: SortKey) {
    store.sort().update(|sort| *sort = sort.toggle(key));
}
