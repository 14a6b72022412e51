//! Domain Layer
//!
//! Contains the item entity and core abstractions.
//! This layer has no storage or browser dependencies.

mod custom_fields;
mod entity;
mod item;

pub use custom_fields::CustomFields;
pub use entity::{DomainError, DomainResult, Entity};
pub use item::{format_number, Item, ItemId};
