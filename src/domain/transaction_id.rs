//! Type-safe transaction identifier.
//!
//! [`TransactionId`] is a newtype wrapper around the `BIGSERIAL` primary
//! key so that transaction ids cannot be confused with other integers
//! (amounts, offsets, limits).

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for a stored transaction.
///
/// Assigned by the store at insertion, strictly increasing, and never
/// reused for the lifetime of the store (not even after a clear).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    /// Wraps a raw id.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TransactionId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<TransactionId> for i64 {
    fn from(id: TransactionId) -> Self {
        id.0
    }
}
