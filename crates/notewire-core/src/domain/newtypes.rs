//! Domain newtypes with validation
//!
//! Strongly-typed wrappers for domain identifiers. Ids are assigned by the
//! server (the record store's integer primary key) and are opaque to the
//! client: the newtype exists so a note id cannot be confused with any other
//! integer in the codebase.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::DomainError;

/// Identifier for Note entities
///
/// Assigned exactly once by the server at creation acknowledgment and never
/// changed afterwards. A client-side note that has not been persisted yet has
/// no `NoteId` at all (see [`NoteDraft`](super::note::NoteDraft)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    /// Wraps a raw server-assigned id
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the inner integer value
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| DomainError::InvalidId(format!("{s}: {e}")))
    }
}

impl From<i64> for NoteId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}
