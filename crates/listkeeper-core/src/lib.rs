//! Listkeeper Core
//!
//! Layered architecture:
//! - domain: Item model and core abstractions
//! - repository: Key-value persistence and the startup migration pass
//! - reducer: Add/edit/delete transitions over the collection
//! - view: Filter, sort, and column derivation for the rendered list
//! - form: Draft input, validation, and candidate items
//! - session: Application state tying the layers together

pub mod config;
pub mod domain;
pub mod form;
pub mod reducer;
pub mod repository;
pub mod session;
pub mod view;

pub use config::AppConfig;
pub use domain::{CustomFields, DomainError, DomainResult, Entity, Item, ItemId};
pub use form::{FormError, ItemCandidate, ItemDraft, OptionalInput, ValidationErrors};
pub use reducer::{reduce, IdGenerator, ItemAction, PendingAction};
pub use repository::{ItemStore, KeyValueStore, MemoryStore};
pub use session::ListSession;
pub use view::{ColumnSet, ListQuery, ListView, SortDirection, SortKey, SortOrder};
