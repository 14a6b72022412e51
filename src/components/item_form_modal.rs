//! Item Form Modal
//!
//! Add/edit form with optional field toggles, custom fields, and
//! per-field validation messages.

use leptos::prelude::*;
use listkeeper_core::form::Field;
use listkeeper_core::{ItemDraft, OptionalInput, ValidationErrors};

use super::CustomFieldsEditor;
use crate::context::AppContext;

/// Optional fields behind an include checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Toggle {
    Quantity,
    Price,
    Notes,
    Category,
}

impl Toggle {
    fn label(self) -> &'static str {
        match self {
            Toggle::Quantity => "Include Quantity",
            Toggle::Price => "Include Price",
            Toggle::Notes => "Include Notes",
            Toggle::Category => "Include Category",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Toggle::Quantity => "Quantity",
            Toggle::Price => "Price",
            Toggle::Notes => "Notes",
            Toggle::Category => "Category",
        }
    }

    fn is_numeric(self) -> bool {
        matches!(self, Toggle::Quantity | Toggle::Price)
    }

    fn field(self) -> Option<Field> {
        match self {
            Toggle::Quantity => Some(Field::Quantity),
            Toggle::Price => Some(Field::Price),
            Toggle::Notes | Toggle::Category => None,
        }
    }

    fn input(self, draft: &ItemDraft) -> &OptionalInput {
        match self {
            Toggle::Quantity => &draft.quantity,
            Toggle::Price => &draft.price,
            Toggle::Notes => &draft.notes,
            Toggle::Category => &draft.category,
        }
    }

    fn input_mut(self, draft: &mut ItemDraft) -> &mut OptionalInput {
        match self {
            Toggle::Quantity => &mut draft.quantity,
            Toggle::Price => &mut draft.price,
            Toggle::Notes => &mut draft.notes,
            Toggle::Category => &mut draft.category,
        }
    }
}

/// Validation message under a field, if it failed
#[component]
fn FieldError(errors: RwSignal<ValidationErrors>, field: Field) -> impl IntoView {
    move || {
        errors.with(|errors| errors.message_for(field)).map(|message| {
            view! { <p class="field-error">{message}</p> }
        })
    }
}

/// Checkbox plus the input it reveals
#[component]
fn ToggleField(draft: RwSignal<ItemDraft>, errors: RwSignal<ValidationErrors>, toggle: Toggle) -> impl IntoView {
    let enabled = move || draft.with(|d| toggle.input(d).enabled);
    let value = move || draft.with(|d| toggle.input(d).value.clone());
    let set_value = move |text: String| draft.update(|d| toggle.input_mut(d).value = text);
    let placeholder = toggle.placeholder();
    let input_type = if toggle.is_numeric() { "number" } else { "text" };

    let input = move || {
        if toggle == Toggle::Notes {
            view! {
                <textarea
                    class="form-input"
                    placeholder=placeholder
                    prop:value=value
                    on:input=move |ev| set_value(event_target_value(&ev))
                ></textarea>
            }
            .into_any()
        } else {
            view! {
                <input
                    class="form-input"
                    type=input_type
                    step="any"
                    placeholder=placeholder
                    prop:value=value
                    on:input=move |ev| set_value(event_target_value(&ev))
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="form-group toggle-field">
            <label class="toggle-label">
                <input
                    type="checkbox"
                    prop:checked=enabled
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        draft.update(|d| toggle.input_mut(d).enabled = checked);
                    }
                />
                {toggle.label()}
            </label>
            <Show when=enabled>{input}</Show>
            {toggle.field().map(|field| view! { <FieldError errors=errors field=field /> })}
        </div>
    }
}

/// Modal form for one item
///
/// Opened by `AppContext::open_add` / `open_edit`. A valid submit hands the
/// candidate to the confirmation step; the form stays open until confirmed.
#[component]
pub fn ItemFormModal(draft: ItemDraft) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let title = if draft.is_editing() { "Edit Item" } else { "Add New Item" };
    let draft = RwSignal::new(draft);
    let errors = RwSignal::new(ValidationErrors::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match draft.with(|d| d.submit()) {
            Ok(candidate) => {
                errors.set(ValidationErrors::default());
                ctx.request_save(candidate);
            }
            Err(found) => {
                log::debug!("form rejected: {}", found);
                errors.set(found);
            }
        }
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| ctx.close_form()>
            <div
                class="modal form-modal"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
            >
                <h2>{title}</h2>
                <form class="item-form" on:submit=on_submit>
                    <div class="form-group">
                        <input
                            type="text"
                            class="form-input"
                            placeholder="Item name"
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                        <FieldError errors=errors field=Field::Name />
                    </div>
                    <div class="form-group">
                        <input
                            type="date"
                            class="form-input"
                            prop:value=move || draft.with(|d| d.date.clone())
                            on:input=move |ev| draft.update(|d| d.date = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <input
                            type="text"
                            class="form-input"
                            placeholder="Added by"
                            prop:value=move || draft.with(|d| d.added_by.clone())
                            on:input=move |ev| draft.update(|d| d.added_by = event_target_value(&ev))
                        />
                    </div>

                    <ToggleField draft=draft errors=errors toggle=Toggle::Quantity />
                    <ToggleField draft=draft errors=errors toggle=Toggle::Price />
                    <Show when=move || draft.with(|d| d.computes_total())>
                        <p class="total-hint">"Total will be auto-calculated as Quantity × Price."</p>
                    </Show>
                    <ToggleField draft=draft errors=errors toggle=Toggle::Notes />
                    <ToggleField draft=draft errors=errors toggle=Toggle::Category />

                    <CustomFieldsEditor draft=draft />

                    <div class="modal-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| ctx.close_form()>
                            "Cancel"
                        </button>
                        <button type="submit" class="save-btn">"Save"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
