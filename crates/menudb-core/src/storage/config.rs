//! Storage configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Default database file.
pub const DEFAULT_DATABASE_PATH: &str = "restaurante.db";

/// Default maximum number of pooled connections.
pub const DEFAULT_POOL_SIZE: u32 = 4;

/// Default time to wait for a pooled connection.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Default time SQLite waits on a locked database before failing.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for opening a menu database.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite database file.
    pub path: PathBuf,

    /// Maximum number of pooled connections.
    pub pool_size: u32,

    /// How long an operation waits for a pooled connection.
    pub acquire_timeout: Duration,

    /// How long SQLite retries while another writer holds the lock.
    pub busy_timeout: Duration,

    /// Turn on SQLite foreign keys, so deleting a menu item that orders
    /// still reference fails instead of orphaning them.
    pub enforce_foreign_keys: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATABASE_PATH),
            pool_size: DEFAULT_POOL_SIZE,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            enforce_foreign_keys: false,
        }
    }
}

impl StoreConfig {
    /// Create a new configuration with the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Set the maximum pool size. Values below one are raised to one.
    pub fn with_pool_size(mut self, size: u32) -> Self {
        self.pool_size = size.max(1);
        self
    }

    /// Set the connection acquire timeout.
    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// Set the SQLite busy timeout.
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Enable or disable foreign key enforcement.
    pub fn with_foreign_keys(mut self, enforce: bool) -> Self {
        self.enforce_foreign_keys = enforce;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.path, PathBuf::from("restaurante.db"));
        assert_eq!(config.pool_size, DEFAULT_POOL_SIZE);
        assert!(!config.enforce_foreign_keys);
    }

    #[test]
    fn test_builder() {
        let config = StoreConfig::new("/tmp/menu.db")
            .with_pool_size(0)
            .with_busy_timeout(Duration::from_millis(250))
            .with_foreign_keys(true);

        assert_eq!(config.path, PathBuf::from("/tmp/menu.db"));
        assert_eq!(config.pool_size, 1);
        assert_eq!(config.busy_timeout, Duration::from_millis(250));
        assert!(config.enforce_foreign_keys);
    }
}
