//! Types library for the limit order book
//!
//! Core value types shared by the matching engine and its collaborators.
//!
//! # Modules
//! - `ids`: Order identifiers
//! - `numeric`: Integer tick price and quantity types
//! - `order`: Order sides, variants, and consumption operations
//! - `trade`: Trade execution records

pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;

pub use ids::OrderId;
pub use numeric::{Price, Quantity};
pub use order::{Order, OrderKind, Side};
pub use trade::Trade;
