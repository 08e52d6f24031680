//! Order book infrastructure module
//!
//! Contains the per-price FIFO queue and the price-ordered book sides.

pub mod price_level;
pub mod side;

pub use price_level::PriceLevel;
pub use side::BookSide;
