//! Order records.

use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// A row of the `pedidos` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Surrogate key assigned by the store.
    pub id: i64,
    /// Menu item the order was placed for. May dangle after the item is deleted.
    pub menu_item_id: i64,
    /// Units ordered.
    pub quantity: i64,
    /// Price times quantity at the moment the order was placed.
    pub total: f64,
}

impl Order {
    pub(crate) const COLUMNS: &'static str = "id, producto_id, cantidad, total";

    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            menu_item_id: row.get(1)?,
            quantity: row.get(2)?,
            total: row.get(3)?,
        })
    }
}

/// An order joined with the name of its menu item, for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub order_id: i64,
    pub product: String,
    pub quantity: i64,
    pub total: f64,
}

impl OrderLine {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            order_id: row.get(0)?,
            product: row.get(1)?,
            quantity: row.get(2)?,
            total: row.get(3)?,
        })
    }
}
