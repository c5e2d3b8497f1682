//! SQLite storage: configuration, connection pool and table definitions.

mod config;
mod pool;
pub mod schema;

pub use config::{
    StoreConfig, DEFAULT_ACQUIRE_TIMEOUT, DEFAULT_BUSY_TIMEOUT, DEFAULT_DATABASE_PATH,
    DEFAULT_POOL_SIZE,
};
pub use pool::{open_pool, ConnectionPool, PooledConnection};
