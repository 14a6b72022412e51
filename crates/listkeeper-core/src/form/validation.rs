//! Form validation errors.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Form fields that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Quantity,
    Price,
}

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Name is required")]
    NameRequired,
    #[error("Quantity must be positive number")]
    QuantityNotPositive,
    #[error("Price must be positive number")]
    PriceNotPositive,
    #[error("Total is too large")]
    TotalOutOfRange,
    #[error("Custom field needs both a key and a value")]
    IncompleteCustomField,
}

impl FormError {
    pub fn field(&self) -> Option<Field> {
        match self {
            FormError::NameRequired => Some(Field::Name),
            FormError::QuantityNotPositive => Some(Field::Quantity),
            FormError::PriceNotPositive | FormError::TotalOutOfRange => Some(Field::Price),
            FormError::IncompleteCustomField => None,
        }
    }
}

/// Every error found in one submit, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FormError>,
}

impl ValidationErrors {
    pub fn push(&mut self, error: FormError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormError> {
        self.errors.iter()
    }

    /// Message to show next to `field`, if it failed
    pub fn message_for(&self, field: Field) -> Option<String> {
        self.errors
            .iter()
            .find(|e| e.field() == Some(field))
            .map(|e| e.to_string())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Parse a positive, finite amount typed into a number input
pub fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}
