//! Catalog store: create, read, update and delete menu items.

use rusqlite::{params, OptionalExtension};
use tracing::debug;

use super::MenuItem;
use crate::error::{is_foreign_key_violation, is_unique_violation, Error, Result};
use crate::input::{normalize_name, Price, ProductName};
use crate::outcome::Outcome;
use crate::storage::ConnectionPool;

/// Persistence for the `menu` table.
///
/// Cloning is cheap; clones share the same pool.
#[derive(Clone)]
pub struct CatalogStore {
    pool: ConnectionPool,
}

impl CatalogStore {
    /// Create a store over the given pool.
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    /// All menu items, ordered by id.
    pub fn list_all(&self) -> Result<Vec<MenuItem>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM menu ORDER BY id",
            MenuItem::COLUMNS
        ))?;
        let items = stmt
            .query_map([], MenuItem::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    /// Get a menu item by id.
    pub fn get(&self, id: i64) -> Result<Option<MenuItem>> {
        let conn = self.pool.get()?;
        let item = conn
            .query_row(
                &format!("SELECT {} FROM menu WHERE id = ?1", MenuItem::COLUMNS),
                params![id],
                MenuItem::from_row,
            )
            .optional()?;
        Ok(item)
    }

    /// Look up a menu item by name. The name is normalized first.
    pub fn find_by_name(&self, name: &str) -> Result<Option<MenuItem>> {
        let conn = self.pool.get()?;
        let item = conn
            .query_row(
                &format!("SELECT {} FROM menu WHERE producto = ?1", MenuItem::COLUMNS),
                params![normalize_name(name)],
                MenuItem::from_row,
            )
            .optional()?;
        Ok(item)
    }

    /// Insert a new menu item.
    ///
    /// Fails with [`Error::DuplicateName`] if an item with the same
    /// normalized name exists.
    pub fn create(&self, name: &str, price: Price) -> Result<MenuItem> {
        let name = ProductName::parse(name)?;
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO menu (producto, precio) VALUES (?1, ?2)",
            params![name.as_str(), price.value()],
        )
        .map_err(|e| duplicate_or(e, &name))?;

        let item = MenuItem {
            id: conn.last_insert_rowid(),
            name: name.into_inner(),
            price: price.value(),
        };
        debug!(id = item.id, name = %item.name, price = item.price, "menu item created");
        Ok(item)
    }

    /// Overwrite both name and price of an existing item.
    ///
    /// A missing id changes nothing and yields [`Outcome::NotFound`].
    /// Renaming onto another item's name fails with [`Error::DuplicateName`].
    pub fn update(&self, id: i64, name: &str, price: Price) -> Result<Outcome> {
        let name = ProductName::parse(name)?;
        let conn = self.pool.get()?;

        let affected = conn
            .execute(
                "UPDATE menu SET producto = ?1, precio = ?2 WHERE id = ?3",
                params![name.as_str(), price.value(), id],
            )
            .map_err(|e| duplicate_or(e, &name))?;

        let outcome = Outcome::from_affected(affected);
        debug!(id, name = %name, price = price.value(), ?outcome, "menu item update");
        Ok(outcome)
    }

    /// Delete a menu item by id.
    ///
    /// Orders that reference the item are left in place unless foreign keys
    /// are enforced, in which case the delete fails with
    /// [`Error::Referenced`].
    pub fn delete(&self, id: i64) -> Result<Outcome> {
        let conn = self.pool.get()?;
        let affected = conn
            .execute("DELETE FROM menu WHERE id = ?1", params![id])
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    Error::Referenced { id }
                } else {
                    Error::Storage(e)
                }
            })?;

        let outcome = Outcome::from_affected(affected);
        debug!(id, ?outcome, "menu item delete");
        Ok(outcome)
    }

    /// Number of menu items.
    pub fn count(&self) -> Result<usize> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM menu", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub(crate) fn pool(&self) -> &ConnectionPool {
        &self.pool
    }
}

fn duplicate_or(err: rusqlite::Error, name: &ProductName) -> Error {
    if is_unique_violation(&err) {
        Error::DuplicateName {
            name: name.to_string(),
        }
    } else {
        Error::Storage(err)
    }
}
