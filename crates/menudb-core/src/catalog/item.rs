//! Menu item record.

use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// A row of the `menu` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Surrogate key assigned by the store.
    pub id: i64,
    /// Normalized product name.
    pub name: String,
    /// Unit price.
    pub price: f64,
}

impl MenuItem {
    /// Columns in the order [`MenuItem::from_row`] reads them.
    pub(crate) const COLUMNS: &'static str = "id, producto, precio";

    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            price: row.get(2)?,
        })
    }
}
