//! Database handle tying the pool to the catalog and order stores.

use serde::Serialize;
use tracing::info;

use crate::catalog::{CatalogStore, MenuItem};
use crate::error::Result;
use crate::orders::{Order, OrderStore};
use crate::storage::{open_pool, schema, ConnectionPool, StoreConfig};

/// Raw contents of both tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableDump {
    pub menu: Vec<MenuItem>,
    pub orders: Vec<Order>,
}

/// An open menu database.
///
/// Holds only the connection pool; stores handed out by [`MenuDb::catalog`]
/// and [`MenuDb::orders`] share it.
#[derive(Clone)]
pub struct MenuDb {
    pool: ConnectionPool,
    config: StoreConfig,
}

impl MenuDb {
    /// Open the database described by `config`, creating the tables if needed.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let pool = open_pool(&config)?;
        schema::create_tables(&*pool.get()?)?;

        info!(path = %config.path.display(), "menu database opened");
        Ok(Self { pool, config })
    }

    /// The configuration this database was opened with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Store for menu items.
    pub fn catalog(&self) -> CatalogStore {
        CatalogStore::new(self.pool.clone())
    }

    /// Store for orders.
    pub fn orders(&self) -> OrderStore {
        OrderStore::new(self.pool.clone())
    }

    /// Read both tables in full, orphaned orders included.
    pub fn dump(&self) -> Result<TableDump> {
        Ok(TableDump {
            menu: self.catalog().list_all()?,
            orders: self.orders().list_raw()?,
        })
    }
}
