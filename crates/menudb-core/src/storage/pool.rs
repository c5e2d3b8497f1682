//! Connection pool over the SQLite file.
//!
//! Stores never hold a connection between calls: each operation checks one
//! out with [`ConnectionPool::get`] and the guard hands it back on drop.

use r2d2_sqlite::SqliteConnectionManager;
use tracing::debug;

use super::StoreConfig;
use crate::error::Result;

/// Pool of SQLite connections.
pub type ConnectionPool = r2d2::Pool<SqliteConnectionManager>;

/// A connection checked out of the pool.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Build a pool for the configured database file.
///
/// Every new connection gets the configured busy timeout and an explicit
/// `foreign_keys` setting, so enforcement never depends on how SQLite was
/// compiled.
pub fn open_pool(config: &StoreConfig) -> Result<ConnectionPool> {
    let busy_timeout = config.busy_timeout;
    let foreign_keys = if config.enforce_foreign_keys { "ON" } else { "OFF" };

    let manager = SqliteConnectionManager::file(&config.path).with_init(move |conn| {
        conn.busy_timeout(busy_timeout)?;
        conn.execute_batch(&format!("PRAGMA foreign_keys = {foreign_keys};"))
    });

    let pool = r2d2::Pool::builder()
        .max_size(config.pool_size)
        .connection_timeout(config.acquire_timeout)
        .build(manager)?;

    debug!(
        path = %config.path.display(),
        pool_size = config.pool_size,
        foreign_keys,
        "connection pool opened"
    );
    Ok(pool)
}
