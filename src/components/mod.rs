//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod item_list;
mod item_form_modal;
mod custom_fields_editor;
mod confirmation_modal;
mod log_panel;

pub use header::Header;
pub use item_list::ItemList;
pub use item_form_modal::ItemFormModal;
pub use custom_fields_editor::CustomFieldsEditor;
pub use confirmation_modal::ConfirmationModal;
pub use log_panel::LogPanel;
