//! # Item Form
//!
//! The three editable inputs an operator fills in before adding or updating a record.
//! Values are kept raw, exactly as typed; [`ItemForm::validate`] is the single gate
//! between raw input and a [`StockItem`] that may be written to disk.

use crate::error::{Result, StockError};
use crate::model::StockItem;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Category,
    Quantity,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::Name => write!(f, "item name"),
            FormField::Category => write!(f, "category"),
            FormField::Quantity => write!(f, "quantity"),
        }
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(FormField::Name),
            "category" | "cat" => Ok(FormField::Category),
            "quantity" | "qty" => Ok(FormField::Quantity),
            other => Err(format!("Unknown field: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemForm {
    pub name: String,
    pub category: String,
    pub quantity: String,
}

impl ItemForm {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity: quantity.into(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Copies a row's values into the inputs, ready for an edit-in-place update.
    pub fn populate(&mut self, item: &StockItem) {
        self.name = item.name.clone();
        self.category = item.category.clone();
        self.quantity = item.quantity.clone();
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Category => self.category = value,
            FormField::Quantity => self.quantity = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.category.is_empty() && self.quantity.is_empty()
    }

    /// Turns the inputs into a storable item.
    ///
    /// Checks run in a fixed order: required fields, then the quantity, then characters
    /// the file format can't represent. Whitespace around each value is dropped.
    pub fn validate(&self) -> Result<StockItem> {
        let name = self.name.trim();
        let category = self.category.trim();
        let quantity = self.quantity.trim();

        if name.is_empty() {
            return Err(StockError::MissingField(FormField::Name));
        }
        if quantity.is_empty() {
            return Err(StockError::MissingField(FormField::Quantity));
        }

        match quantity.parse::<i64>() {
            Ok(n) if n >= 0 => {}
            _ => return Err(StockError::InvalidQuantity(quantity.to_string())),
        }

        for (field, value) in [
            (FormField::Name, name),
            (FormField::Category, category),
            (FormField::Quantity, quantity),
        ] {
            if value.contains(['|', '\n', '\r']) {
                return Err(StockError::ReservedCharacter(field));
            }
        }

        Ok(StockItem::new(name, category, quantity))
    }
}
