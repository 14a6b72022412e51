//! Custom Fields Editor
//!
//! Key/value rows attached to the item being edited.

use leptos::prelude::*;
use listkeeper_core::ItemDraft;

#[component]
pub fn CustomFieldsEditor(draft: RwSignal<ItemDraft>) -> impl IntoView {
    let (new_key, set_new_key) = signal(String::new());
    let (new_value, set_new_value) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let add_field = move |_: web_sys::MouseEvent| {
        let key = new_key.get_untracked();
        let value = new_value.get_untracked();
        let mut result = Ok(());
        draft.update(|d| result = d.add_custom_field(&key, &value));
        match result {
            Ok(()) => {
                set_new_key.set(String::new());
                set_new_value.set(String::new());
                set_error.set(None);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let rows = move || {
        draft.with(|d| {
            d.custom_fields
                .iter()
                .map(|(key, value)| {
                    let label = format!("{}: {}", key, value);
                    let key = key.to_string();
                    view! {
                        <li class="custom-field-row">
                            <span>{label}</span>
                            <button
                                type="button"
                                class="remove-btn"
                                on:click=move |_| draft.update(|d| d.remove_custom_field(&key))
                            >
                                "Remove"
                            </button>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <fieldset class="custom-fields">
            <legend>"Custom Fields"</legend>
            <ul class="custom-field-list">{rows}</ul>
            <div class="custom-field-inputs">
                <input
                    type="text"
                    class="form-input"
                    placeholder="Field name"
                    prop:value=new_key
                    on:input=move |ev| set_new_key.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    class="form-input"
                    placeholder="Field value"
                    prop:value=new_value
                    on:input=move |ev| set_new_value.set(event_target_value(&ev))
                />
                <button type="button" class="add-field-btn" on:click=add_field>
                    "Add Field"
                </button>
            </div>
            {move || error.get().map(|message| view! { <p class="field-error">{message}</p> })}
        </fieldset>
    }
}
