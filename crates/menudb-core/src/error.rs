//! Core error types.

use std::fmt;

use rusqlite::ffi;
use thiserror::Error;

/// Result alias used throughout the core.
pub type Result<T> = std::result::Result<T, Error>;

/// Which table a not-found condition refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    /// A row of the `menu` table.
    MenuItem,
    /// A row of the `pedidos` table.
    Order,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::MenuItem => write!(f, "menu item"),
            Entity::Order => write!(f, "order"),
        }
    }
}

/// Core database errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A menu item with the same normalized name already exists.
    #[error("menu item '{name}' already exists")]
    DuplicateName { name: String },

    /// An order referenced a product that is not on the menu.
    #[error("product '{name}' is not on the menu")]
    ProductNotFound { name: String },

    /// No row matched the given id.
    #[error("{entity} {id} not found")]
    NotFound { entity: Entity, id: i64 },

    /// A price, quantity or name could not be parsed.
    #[error("malformed {field} '{value}': {reason}")]
    MalformedInput {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// The menu item is still referenced by orders (foreign keys enforced).
    #[error("menu item {id} is still referenced by orders")]
    Referenced { id: i64 },

    /// SQLite error.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// Seed document could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed document is not valid JSON.
    #[error("invalid seed document: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Error::MalformedInput {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error is one of the domain conditions a caller is
    /// expected to surface to a user, as opposed to an infrastructure fault.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Error::DuplicateName { .. }
                | Error::ProductNotFound { .. }
                | Error::NotFound { .. }
                | Error::MalformedInput { .. }
                | Error::Referenced { .. }
        )
    }
}

/// Extended result code of a failed SQLite call, if any.
fn extended_code(err: &rusqlite::Error) -> Option<i32> {
    match err {
        rusqlite::Error::SqliteFailure(ffi::Error { extended_code, .. }, _) => {
            Some(*extended_code)
        }
        _ => None,
    }
}

/// Whether the error is a UNIQUE constraint violation.
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    extended_code(err) == Some(ffi::SQLITE_CONSTRAINT_UNIQUE)
}

/// Whether the error is a FOREIGN KEY constraint violation.
pub(crate) fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    extended_code(err) == Some(ffi::SQLITE_CONSTRAINT_FOREIGNKEY)
}
