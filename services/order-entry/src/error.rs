//! Order-entry input errors
//!
//! Raised for lines that announce an order (`B`/`S` prefix) but fail to
//! parse or validate. These are reported and skipped; they never reach
//! the matching engine.

use std::num::ParseIntError;
use thiserror::Error;

/// Reasons an order line is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected 4 or 5 comma-separated fields, got {0}")]
    FieldCount(usize),

    #[error("unknown side `{0}`")]
    Side(String),

    #[error("invalid {field}: {source}")]
    InvalidNumber {
        field: &'static str,
        #[source]
        source: ParseIntError,
    },

    #[error("negative price")]
    NegativePrice,

    #[error("negative quantity")]
    NegativeQuantity,

    #[error("iceberg peak must be positive")]
    NonPositivePeak,
}
