//! Inventory field vocabulary for bound-text elements.
//!
//! A bound-text element stores a field *name*, never a value; the value is
//! resolved against a concrete inventory record by the print pipeline. The
//! editor only needs display placeholders for its stand-in rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inventory record fields a bound-text element can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryField {
    /// Item name
    Name,
    /// Stock keeping unit
    Sku,
    /// Item category
    Category,
    /// Storage location
    Location,
    /// Unit price
    Price,
    /// Quantity on hand
    Quantity,
}

impl InventoryField {
    /// All fields, in the order the property panel offers them.
    pub const ALL: [InventoryField; 6] = [
        InventoryField::Name,
        InventoryField::Sku,
        InventoryField::Category,
        InventoryField::Location,
        InventoryField::Price,
        InventoryField::Quantity,
    ];

    /// Field name as persisted in template layouts.
    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryField::Name => "name",
            InventoryField::Sku => "sku",
            InventoryField::Category => "category",
            InventoryField::Location => "location",
            InventoryField::Price => "price",
            InventoryField::Quantity => "quantity",
        }
    }

    /// Parse from a persisted field name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(InventoryField::Name),
            "sku" => Some(InventoryField::Sku),
            "category" => Some(InventoryField::Category),
            "location" => Some(InventoryField::Location),
            "price" => Some(InventoryField::Price),
            "quantity" => Some(InventoryField::Quantity),
            _ => None,
        }
    }

    /// Sample text the editor shows in place of the resolved value.
    pub fn placeholder(&self) -> &'static str {
        match self {
            InventoryField::Name => "Product Name",
            InventoryField::Sku => "ABC-12345",
            InventoryField::Category => "Category",
            InventoryField::Location => "Location",
            InventoryField::Price => "$ 99.99",
            InventoryField::Quantity => "100 pcs",
        }
    }

    /// Human-readable label for the property panel.
    pub fn label(&self) -> &'static str {
        match self {
            InventoryField::Name => "Item name",
            InventoryField::Sku => "SKU",
            InventoryField::Category => "Category",
            InventoryField::Location => "Location",
            InventoryField::Price => "Price",
            InventoryField::Quantity => "Quantity",
        }
    }
}

impl fmt::Display for InventoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for field in InventoryField::ALL {
            assert_eq!(InventoryField::parse(field.as_str()), Some(field));
        }
        assert_eq!(InventoryField::parse("custom"), None);
        assert_eq!(InventoryField::parse(""), None);
    }

    #[test]
    fn test_placeholders_are_nonempty() {
        for field in InventoryField::ALL {
            assert!(!field.placeholder().is_empty());
            assert!(!field.label().is_empty());
        }
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for field in InventoryField::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }
}
