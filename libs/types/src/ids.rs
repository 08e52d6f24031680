//! Unique identifier types
//!
//! Order ids are assigned by the submitting party and carried through to
//! trade reports unchanged. The book itself never generates ids and does
//! not enforce uniqueness; reusing a live id is a caller error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Create an OrderId from a caller-assigned integer.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner integer.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
