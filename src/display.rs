//! Display Helpers
//!
//! Column layout and cell text for the item table.

use listkeeper_core::domain::format_number;
use listkeeper_core::{ColumnSet, Item, SortKey, SortOrder};

/// Sort controls in toolbar order
pub const SORT_KEYS: &[SortKey] = &[SortKey::Name, SortKey::Price, SortKey::Total];

/// Placeholder for a value the row doesn't have
const MISSING: &str = "-";

/// A rendered table column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    Name,
    Quantity,
    Price,
    Total,
    Notes,
    Category,
    Custom(String),
    AddedBy,
}

impl Column {
    pub fn header(&self) -> String {
        match self {
            Column::Name => "Name".to_string(),
            Column::Quantity => "Quantity".to_string(),
            Column::Price => "Price".to_string(),
            Column::Total => "Total".to_string(),
            Column::Notes => "Notes".to_string(),
            Column::Category => "Category".to_string(),
            Column::Custom(key) => key.clone(),
            Column::AddedBy => "Added By".to_string(),
        }
    }

    pub fn cell(&self, item: &Item) -> String {
        let text = match self {
            Column::Name => Some(item.name.clone()),
            Column::Quantity => item.quantity.map(format_number),
            Column::Price => item.price.map(format_number),
            Column::Total => item.total.map(format_number),
            Column::Notes => item.notes.clone(),
            Column::Category => item.category.clone(),
            Column::Custom(key) => item.custom_fields.get(key).map(str::to_string),
            Column::AddedBy => item.added_by.clone(),
        };
        text.unwrap_or_else(|| MISSING.to_string())
    }
}

/// Columns in display order: fixed columns, custom fields, then author
pub fn visible_columns(columns: &ColumnSet) -> Vec<Column> {
    let mut visible = vec![Column::Name];
    let optional = [
        (columns.quantity, Column::Quantity),
        (columns.price, Column::Price),
        (columns.total, Column::Total),
        (columns.notes, Column::Notes),
        (columns.category, Column::Category),
    ];
    visible.extend(optional.into_iter().filter(|(shown, _)| *shown).map(|(_, c)| c));
    visible.extend(columns.custom_keys.iter().cloned().map(Column::Custom));
    if columns.added_by {
        visible.push(Column::AddedBy);
    }
    visible
}

/// Sort button text, with an arrow on the active key
pub fn sort_label(order: SortOrder, key: SortKey) -> String {
    match order.direction_for(key) {
        Some(direction) => format!("Sort by {} {}", key.label(), direction.arrow()),
        None => format!("Sort by {}", key.label()),
    }
}
