//! Listkeeper Frontend App
//!
//! Loads the stored list, provides shared state, and lays out the page.

use chrono::Utc;
use leptos::prelude::*;
use listkeeper_core::{AppConfig, ItemDraft, ListSession, PendingAction};
use reactive_stores::Store;

use crate::components::{ConfirmationModal, Header, ItemFormModal, ItemList, LogPanel};
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::{AppState, AppStateStoreFields};

/// Toggle the `dark` class on the document element
fn apply_theme(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = if dark { classes.add_1("dark") } else { classes.remove_1("dark") };
    if let Err(e) = result {
        log::warn!("theme class not applied: {:?}", e);
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Load, migrate, and hold the collection
    let session = ListSession::open(BrowserStorage, &AppConfig::default(), Utc::now());
    let store = Store::new(AppState::new(session.items().to_vec(), session.dark_mode()));
    provide_context(store);

    let form = signal::<Option<ItemDraft>>(None);
    let pending = signal::<Option<PendingAction>>(None);
    let ctx = AppContext::new(form, pending, StoredValue::new(session), store);
    provide_context(ctx);

    Effect::new(move |_| apply_theme(store.dark_mode().get()));

    view! {
        <div class="app-layout">
            <Header />
            <main class="main-content">
                <ItemList />
                <LogPanel />
            </main>
            {move || ctx.form.get().map(|draft| view! { <ItemFormModal draft=draft /> })}
            <ConfirmationModal />
        </div>
    }
}
