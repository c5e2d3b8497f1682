//! CLI error types.

use thiserror::Error;

/// Errors surfaced by a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error from the menu store.
    #[error(transparent)]
    Store(#[from] menudb_core::Error),
}

impl CliError {
    /// Whether the failure is a domain condition to show the user as-is.
    pub fn is_domain(&self) -> bool {
        match self {
            CliError::Store(e) => e.is_domain(),
        }
    }
}
