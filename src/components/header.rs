//! Header Component
//!
//! Title bar with the add-item entry point and theme toggle.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let toggle_theme = move |_: web_sys::MouseEvent| {
        let enabled = !store.dark_mode().get_untracked();
        *store.dark_mode().write() = enabled;
        ctx.save_dark_mode(enabled);
    };

    view! {
        <header class="app-header">
            <h1>"Listkeeper"</h1>
            <div class="header-actions">
                <button class="theme-btn" aria-label="Toggle theme" on:click=toggle_theme>
                    {move || if store.dark_mode().get() { "☀" } else { "☾" }}
                </button>
                <button class="add-btn" on:click=move |_| ctx.open_add()>
                    "+ Add Item"
                </button>
            </div>
        </header>
    }
}
