//! Menu

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchasable menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    /// Catalogue identifier
    pub id: String,

    /// Display name, copied onto order items as `foodname`
    pub name: String,

    /// Price of a single unit
    pub unit_price: Decimal,

    /// Image location
    pub image_ref: String,
}

impl MenuEntry {
    /// Creates a new menu entry.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price: Decimal,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            image_ref: image_ref.into(),
        }
    }
}
