//! Matching engine
//!
//! Single-instrument order matching under strict price-time priority,
//! including iceberg (partially hidden) orders.
//!
//! **Key invariants:**
//! - Price priority first, arrival-time priority within a price level
//! - An iceberg order that refills its visible slice re-enters its
//!   level at the tail, forfeiting time priority
//! - Deterministic matching (same inputs, same outputs)
//! - Conservation of quantity
//! - No price level ever rests empty

pub mod book;
pub mod engine;
pub mod matching;

pub use engine::MatchingEngine;
