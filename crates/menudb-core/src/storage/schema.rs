//! Table definitions.

use rusqlite::Connection;
use tracing::info;

use crate::error::Result;

/// Menu items, unique by normalized product name.
pub const MENU_TABLE: &str = "menu";

/// Orders, each referencing one menu item.
pub const ORDERS_TABLE: &str = "pedidos";

const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS menu (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    producto TEXT NOT NULL UNIQUE,
    precio REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS pedidos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    producto_id INTEGER NOT NULL,
    cantidad INTEGER NOT NULL,
    total REAL NOT NULL,
    FOREIGN KEY (producto_id) REFERENCES menu (id)
);
"#;

/// Create both tables if they do not exist yet. Safe to call repeatedly.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(CREATE_TABLES)?;
    info!(tables = ?[MENU_TABLE, ORDERS_TABLE], "schema ready");
    Ok(())
}
