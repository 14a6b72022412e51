//! Item Entity
//!
//! A user-managed record with a required name and optional attributes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::custom_fields::CustomFields;
use super::entity::Entity;

/// Item identifier.
///
/// New items get a millisecond timestamp; older stored data may carry strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl ItemId {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            ItemId::Number(n) => Some(*n),
            ItemId::Text(_) => None,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        ItemId::Number(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

/// A stored list item.
///
/// Absent optional fields are omitted from the JSON rather than written as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Calendar date, `YYYY-MM-DD`
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Always `quantity * price`; see [`Item::set_amounts`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_by: Option<String>,
    /// Legacy author field, backfilled by the startup migration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// ISO-8601 creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

impl Item {
    /// Create an item with only the required fields
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date: date.into(),
            quantity: None,
            price: None,
            total: None,
            notes: None,
            category: None,
            added_by: None,
            created_by: None,
            created_at: None,
            custom_fields: CustomFields::new(),
        }
    }

    /// Set quantity and price together and recompute the total
    pub fn set_amounts(&mut self, quantity: Option<f64>, price: Option<f64>) {
        self.quantity = quantity;
        self.price = price;
        self.total = match (quantity, price) {
            (Some(q), Some(p)) => Some(q * p),
            _ => None,
        };
    }

    /// Whether `total` agrees with `quantity` and `price`
    pub fn total_is_consistent(&self) -> bool {
        match (self.quantity, self.price, self.total) {
            (Some(q), Some(p), Some(t)) => t == q * p,
            (Some(_), Some(_), None) => false,
            (_, _, total) => total.is_none(),
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Shortest decimal form of a number, as shown in the list and matched by search
pub fn format_number(value: f64) -> String {
    value.to_string()
}
