//! Order store: place, list and delete orders.

use rusqlite::{params, OptionalExtension, TransactionBehavior};
use tracing::debug;

use super::{Order, OrderLine};
use crate::error::{Error, Result};
use crate::input::{ProductName, Quantity};
use crate::outcome::Outcome;
use crate::storage::ConnectionPool;

/// Persistence for the `pedidos` table.
#[derive(Clone)]
pub struct OrderStore {
    pool: ConnectionPool,
}

impl OrderStore {
    /// Create a store over the given pool.
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    /// Place an order for `quantity` units of the named product.
    ///
    /// The product is looked up by normalized name and its current price is
    /// frozen into the order's total. Fails with [`Error::ProductNotFound`]
    /// without inserting anything when the product is not on the menu.
    pub fn create(&self, product: &str, quantity: Quantity) -> Result<Order> {
        let name = ProductName::parse(product)?;
        let mut conn = self.pool.get()?;
        // Write lock up front: the lookup and the insert see the same menu row.
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let found: Option<(i64, f64)> = tx
            .query_row(
                "SELECT id, precio FROM menu WHERE producto = ?1",
                params![name.as_str()],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        let Some((menu_item_id, price)) = found else {
            return Err(Error::ProductNotFound {
                name: name.into_inner(),
            });
        };

        let total = price * quantity.value() as f64;
        tx.execute(
            "INSERT INTO pedidos (producto_id, cantidad, total) VALUES (?1, ?2, ?3)",
            params![menu_item_id, quantity.value(), total],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        debug!(id, product = %name, quantity = quantity.value(), total, "order placed");
        Ok(Order {
            id,
            menu_item_id,
            quantity: quantity.value(),
            total,
        })
    }

    /// Get the raw order row by id, whether or not its menu item still exists.
    pub fn get(&self, id: i64) -> Result<Option<Order>> {
        let conn = self.pool.get()?;
        let order = conn
            .query_row(
                &format!("SELECT {} FROM pedidos WHERE id = ?1", Order::COLUMNS),
                params![id],
                Order::from_row,
            )
            .optional()?;
        Ok(order)
    }

    /// Orders joined with their product names, ordered by order id.
    ///
    /// Orders whose menu item has been deleted are not listed.
    pub fn list_all(&self) -> Result<Vec<OrderLine>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT p.id, m.producto, p.cantidad, p.total
             FROM pedidos p
             JOIN menu m ON p.producto_id = m.id
             ORDER BY p.id",
        )?;
        let lines = stmt
            .query_map([], OrderLine::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(lines)
    }

    /// Every order row, including orphans, ordered by id.
    pub fn list_raw(&self) -> Result<Vec<Order>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM pedidos ORDER BY id",
            Order::COLUMNS
        ))?;
        let orders = stmt
            .query_map([], Order::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(orders)
    }

    /// Delete an order by id.
    pub fn delete(&self, id: i64) -> Result<Outcome> {
        let conn = self.pool.get()?;
        let affected = conn.execute("DELETE FROM pedidos WHERE id = ?1", params![id])?;

        let outcome = Outcome::from_affected(affected);
        debug!(id, ?outcome, "order delete");
        Ok(outcome)
    }

    /// Number of order rows, orphans included.
    pub fn count(&self) -> Result<usize> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM pedidos", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
