//! menudb core - menu catalog and order persistence over SQLite.
//!
//! Two stores share one connection pool:
//!
//! - [`CatalogStore`] owns the `menu` table (unique, normalized product names).
//! - [`OrderStore`] owns the `pedidos` table (orders priced at creation time).
//!
//! Open a [`MenuDb`] and take the stores from it:
//!
//! ```no_run
//! use menudb_core::{MenuDb, Price, Quantity, StoreConfig};
//!
//! let db = MenuDb::open(StoreConfig::new("restaurante.db"))?;
//! db.catalog().create("Pizza", "12000".parse::<Price>()?)?;
//! let order = db.orders().create("PIZZA ", Quantity::new(2)?)?;
//! assert_eq!(order.total, 24000.0);
//! # Ok::<(), menudb_core::Error>(())
//! ```

pub mod catalog;
pub mod database;
pub mod error;
pub mod input;
pub mod orders;
pub mod outcome;
pub mod storage;

pub use catalog::{CatalogStore, MenuItem, RejectedEntry, SeedDocument, SeedReport};
pub use database::{MenuDb, TableDump};
pub use error::{Entity, Error, Result};
pub use input::{normalize_name, Price, ProductName, Quantity};
pub use orders::{Order, OrderLine, OrderStore};
pub use outcome::Outcome;
pub use storage::StoreConfig;
