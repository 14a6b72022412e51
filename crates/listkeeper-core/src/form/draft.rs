//! Item Draft
//!
//! Raw form state for adding or editing an item, and the candidate it
//! produces once validated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::{parse_positive, FormError, ValidationErrors};
use crate::domain::{format_number, CustomFields, Item, ItemId};

/// An optional form field behind an include toggle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalInput {
    pub enabled: bool,
    pub value: String,
}

impl OptionalInput {
    fn from_value(value: Option<String>) -> Self {
        match value {
            Some(value) => Self { enabled: true, value },
            None => Self::default(),
        }
    }

    /// Trimmed text when enabled and non-blank
    fn text(&self) -> Option<String> {
        let trimmed = self.value.trim();
        (self.enabled && !trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

/// Form state for one item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    /// Set when editing an existing item
    pub id: Option<ItemId>,
    pub name: String,
    pub date: String,
    pub added_by: String,
    pub quantity: OptionalInput,
    pub price: OptionalInput,
    pub notes: OptionalInput,
    pub category: OptionalInput,
    pub custom_fields: CustomFields,
    created_at: Option<String>,
    created_by: Option<String>,
}

impl ItemDraft {
    /// Blank form dated `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            ..Default::default()
        }
    }

    /// Form prefilled from an existing item. Toggles start on for fields the item has.
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: Some(item.id.clone()),
            name: item.name.clone(),
            date: item.date.clone(),
            added_by: item.added_by.clone().unwrap_or_default(),
            quantity: OptionalInput::from_value(item.quantity.map(format_number)),
            price: OptionalInput::from_value(item.price.map(format_number)),
            notes: OptionalInput::from_value(item.notes.clone()),
            category: OptionalInput::from_value(item.category.clone()),
            custom_fields: item.custom_fields.clone(),
            created_at: item.created_at.clone(),
            created_by: item.created_by.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// Both amounts are toggled on, so a total will be computed
    pub fn computes_total(&self) -> bool {
        self.quantity.enabled && self.price.enabled
    }

    /// Add one custom field. Key and value are trimmed and must both be non-empty.
    pub fn add_custom_field(&mut self, key: &str, value: &str) -> Result<(), FormError> {
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            return Err(FormError::IncompleteCustomField);
        }
        self.custom_fields.insert(key, value);
        Ok(())
    }

    pub fn remove_custom_field(&mut self, key: &str) {
        self.custom_fields.remove(key);
    }

    /// Validate the form and build the candidate item.
    ///
    /// All failing fields are reported together.
    pub fn submit(&self) -> Result<ItemCandidate, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FormError::NameRequired);
        }

        let quantity = if self.quantity.enabled {
            let parsed = parse_positive(&self.quantity.value);
            if parsed.is_none() {
                errors.push(FormError::QuantityNotPositive);
            }
            parsed
        } else {
            None
        };

        let price = if self.price.enabled {
            let parsed = parse_positive(&self.price.value);
            if parsed.is_none() {
                errors.push(FormError::PriceNotPositive);
            }
            parsed
        } else {
            None
        };

        if let (Some(q), Some(p)) = (quantity, price) {
            if !(q * p).is_finite() {
                errors.push(FormError::TotalOutOfRange);
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let added_by = self.added_by.trim();
        Ok(ItemCandidate {
            id: self.id.clone(),
            name: name.to_string(),
            date: self.date.clone(),
            added_by: (!added_by.is_empty()).then(|| added_by.to_string()),
            quantity,
            price,
            notes: self.notes.text(),
            category: self.category.text(),
            custom_fields: self.custom_fields.clone(),
            created_at: self.created_at.clone(),
            created_by: self.created_by.clone(),
        })
    }
}

/// A validated item awaiting an id and confirmation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCandidate {
    pub id: Option<ItemId>,
    pub name: String,
    pub date: String,
    pub added_by: Option<String>,
    pub quantity: Option<f64>,
    pub price: Option<f64>,
    pub notes: Option<String>,
    pub category: Option<String>,
    pub custom_fields: CustomFields,
    pub created_at: Option<String>,
    pub created_by: Option<String>,
}

impl ItemCandidate {
    /// Build the stored record, computing the total
    pub fn into_item(self, id: ItemId) -> Item {
        let mut item = Item::new(id, self.name, self.date);
        item.set_amounts(self.quantity, self.price);
        item.notes = self.notes;
        item.category = self.category;
        item.added_by = self.added_by;
        item.custom_fields = self.custom_fields;
        item.created_at = self.created_at;
        item.created_by = self.created_by;
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    fn enabled(value: &str) -> OptionalInput {
        OptionalInput { enabled: true, value: value.to_string() }
    }

    #[test]
    fn test_new_draft_defaults_to_today() {
        assert_eq!(ItemDraft::new(today()).date, "2024-03-09");
    }

    #[test]
    fn test_apples_total() {
        let mut draft = ItemDraft::new(today());
        draft.name = "Apples".to_string();
        draft.quantity = enabled("3");
        draft.price = enabled("2.5");

        let item = draft.submit().unwrap().into_item(ItemId::Number(1));
        assert_eq!(item.total, Some(7.5));
        assert!(item.total_is_consistent());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut draft = ItemDraft::new(today());
        draft.name = "   ".to_string();
        let errors = draft.submit().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message_for(Field::Name).as_deref(), Some("Name is required"));
    }

    #[test]
    fn test_all_errors_reported_together() {
        let mut draft = ItemDraft::new(today());
        draft.quantity = enabled("0");
        draft.price = enabled("cheap");
        let errors = draft.submit().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_disabled_fields_are_omitted() {
        let mut draft = ItemDraft::new(today());
        draft.name = "  Tea ".to_string();
        draft.quantity = OptionalInput { enabled: false, value: "not a number".to_string() };
        draft.notes = OptionalInput { enabled: false, value: "hidden".to_string() };
        draft.category = enabled("  ");

        let candidate = draft.submit().unwrap();
        assert_eq!(candidate.name, "Tea");
        assert_eq!(candidate.quantity, None);
        assert_eq!(candidate.notes, None);
        assert_eq!(candidate.category, None);
        assert_eq!(candidate.added_by, None);

        let item = candidate.into_item(ItemId::Number(2));
        assert_eq!(item.total, None);
    }

    #[test]
    fn test_price_without_quantity_has_no_total() {
        let mut draft = ItemDraft::new(today());
        draft.name = "Lamp".to_string();
        draft.price = enabled("20");
        let item = draft.submit().unwrap().into_item(ItemId::Number(3));
        assert_eq!(item.price, Some(20.0));
        assert_eq!(item.total, None);
    }

    #[test]
    fn test_overflowing_total_is_rejected() {
        let mut draft = ItemDraft::new(today());
        draft.name = "Stars".to_string();
        draft.quantity = enabled("1e200");
        draft.price = enabled("1e200");

        let errors = draft.submit().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message_for(Field::Price).as_deref(), Some("Total is too large"));

        draft.price = enabled("2");
        let item = draft.submit().unwrap().into_item(ItemId::Number(4));
        assert_eq!(item.total, Some(2e200));
    }

    #[test]
    fn test_custom_field_editor() {
        let mut draft = ItemDraft::new(today());
        assert_eq!(draft.add_custom_field(" ", "x"), Err(FormError::IncompleteCustomField));
        assert_eq!(draft.add_custom_field("k", ""), Err(FormError::IncompleteCustomField));
        draft.add_custom_field(" color ", " red ").unwrap();
        draft.add_custom_field("size", "L").unwrap();
        assert_eq!(draft.custom_fields.get("color"), Some("red"));

        draft.remove_custom_field("color");
        assert_eq!(draft.custom_fields.keys().collect::<Vec<_>>(), vec!["size"]);
    }

    #[test]
    fn test_edit_round_trip_keeps_metadata() {
        let mut item = Item::new(42, "Rice", "2024-01-01");
        item.set_amounts(Some(2.0), Some(1.5));
        item.notes = Some("basmati".to_string());
        item.created_at = Some("2024-01-01T08:00:00.000Z".to_string());
        item.created_by = Some("Unknown".to_string());

        let draft = ItemDraft::from_item(&item);
        assert!(draft.is_editing());
        assert!(draft.quantity.enabled);
        assert_eq!(draft.quantity.value, "2");
        assert!(!draft.category.enabled);

        let candidate = draft.submit().unwrap();
        let id = candidate.id.clone().unwrap();
        assert_eq!(candidate.into_item(id), item);
    }
}
