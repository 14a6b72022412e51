//! Confirmation Modal Component
//!
//! Gate shown before every save or delete reaches the collection.

use leptos::prelude::*;

use crate::context::AppContext;

/// Confirmation dialog for the pending change
///
/// Shown while `AppContext::pending` holds a change. Confirm applies and
/// persists it; cancel or a click on the backdrop discards it.
#[component]
pub fn ConfirmationModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let message = move || {
        ctx.pending
            .with(|pending| pending.as_ref().map(|p| p.message()).unwrap_or_default())
    };

    view! {
        <Show when=move || ctx.pending.with(|pending| pending.is_some())>
            <div class="modal-backdrop confirm-backdrop" on:click=move |_| ctx.cancel_pending()>
                <div
                    class="modal confirm-modal"
                    role="alertdialog"
                    aria-modal="true"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <p class="confirm-message">{message}</p>
                    <div class="modal-actions">
                        <button
                            type="button"
                            class="cancel-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                ctx.cancel_pending();
                            }
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class="confirm-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                ctx.confirm_pending();
                            }
                        >
                            "Confirm"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
