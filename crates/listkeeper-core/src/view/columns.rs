//! Dynamic column derivation.

use std::collections::HashSet;

use crate::domain::Item;

/// Optional columns present in the rendered rows, plus custom-field headers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSet {
    pub quantity: bool,
    pub price: bool,
    pub total: bool,
    pub notes: bool,
    pub category: bool,
    pub added_by: bool,
    /// Custom-field keys across the whole collection, first-seen order
    pub custom_keys: Vec<String>,
}

impl ColumnSet {
    /// Optional flags come from `rows`; custom keys come from `all` so headers
    /// stay put while searching.
    pub fn derive(rows: &[&Item], all: &[Item]) -> Self {
        Self {
            quantity: rows.iter().any(|i| i.quantity.is_some()),
            price: rows.iter().any(|i| i.price.is_some()),
            total: rows.iter().any(|i| i.total.is_some()),
            notes: rows.iter().any(|i| i.notes.is_some()),
            category: rows.iter().any(|i| i.category.is_some()),
            added_by: rows.iter().any(|i| i.added_by.is_some()),
            custom_keys: custom_field_keys(all),
        }
    }
}

/// Distinct custom-field keys in order of first appearance
pub fn custom_field_keys(items: &[Item]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .flat_map(|item| item.custom_fields.keys())
        .filter(|key| seen.insert(*key))
        .map(str::to_string)
        .collect()
}
