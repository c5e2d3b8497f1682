//! Result of a by-id mutation.

use serde::Serialize;

use crate::error::{Entity, Error, Result};

/// What an update or delete by id actually did.
///
/// A missing id is not an error at the store level; callers that want one
/// use [`Outcome::require`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A row matched and was changed.
    Applied,
    /// No row had the given id; nothing changed.
    NotFound,
}

impl Outcome {
    /// Map an affected-row count to an outcome.
    pub fn from_affected(affected: usize) -> Self {
        if affected == 0 {
            Outcome::NotFound
        } else {
            Outcome::Applied
        }
    }

    /// Whether a row was changed.
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }

    /// Turn a miss into [`Error::NotFound`].
    pub fn require(self, entity: Entity, id: i64) -> Result<()> {
        match self {
            Outcome::Applied => Ok(()),
            Outcome::NotFound => Err(Error::NotFound { entity, id }),
        }
    }
}
