//! Item List Component
//!
//! Search box, sort controls, and the item table with dynamic columns.

use leptos::prelude::*;
use listkeeper_core::{ListView, SortKey};

use crate::context::AppContext;
use crate::display::{sort_label, visible_columns, SORT_KEYS};
use crate::store::{store_query, store_toggle_sort, use_app_store, AppStateStoreFields};

/// Sort toggle for one key
#[component]
fn SortButton(sort_key: SortKey) -> impl IntoView {
    let store = use_app_store();

    view! {
        <button class="sort-btn" on:click=move |_| store_toggle_sort(&store, sort_key)>
            {move || sort_label(store.sort().get(), sort_key)}
        </button>
    }
}

/// Message shown when no rows are rendered
#[component]
fn EmptyState(has_items: bool) -> impl IntoView {
    if has_items {
        view! {
            <div class="empty-state">
                <p class="empty-title">"No items match your search."</p>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="empty-state">
                <p class="empty-title">"No items yet."</p>
                <p class="empty-hint">"Add your first item to get started!"</p>
            </div>
        }
        .into_any()
    }
}

/// Filtered, sorted item table
#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let list_view = Memo::new(move |_| {
        let query = store_query(&store);
        store.items().with(|items| ListView::derive(items, &query))
    });

    let table = move || {
        let current = list_view.get();
        if current.is_empty() {
            let has_items = store.items().with(|items| !items.is_empty());
            return view! { <EmptyState has_items=has_items /> }.into_any();
        }

        let columns = visible_columns(&current.columns);
        let headers = columns
            .iter()
            .map(|column| view! { <th>{column.header()}</th> })
            .collect_view();
        let rows = current
            .rows
            .into_iter()
            .map(|item| {
                let cells = columns
                    .iter()
                    .map(|column| view! { <td>{column.cell(&item)}</td> })
                    .collect_view();
                let id = item.id.clone();
                view! {
                    <tr class="item-row">
                        {cells}
                        <td class="row-actions">
                            <button
                                class="edit-btn"
                                aria-label="Edit"
                                on:click=move |_| ctx.open_edit(&item)
                            >
                                "✎"
                            </button>
                            <button
                                class="delete-btn"
                                aria-label="Delete"
                                on:click=move |_| ctx.request_delete(id.clone())
                            >
                                "×"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view();

        view! {
            <div class="table-wrapper">
                <table class="item-table">
                    <thead>
                        <tr>
                            {headers}
                            <th class="actions-col">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="item-list">
            <div class="list-toolbar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search items..."
                    prop:value=move || store.search().get()
                    on:input=move |ev| *store.search().write() = event_target_value(&ev)
                />
                <div class="sort-controls">
                    {SORT_KEYS
                        .iter()
                        .map(|sort_key| view! { <SortButton sort_key=*sort_key /> })
                        .collect_view()}
                </div>
            </div>
            {table}
            <p class="item-count">
                {move || {
                    let shown = list_view.with(|current| current.rows.len());
                    let total = store.items().with(|items| items.len());
                    format!("{} of {} items", shown, total)
                }}
            </p>
        </div>
    }
}
