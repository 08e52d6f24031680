//! Crossing detection logic
//!
//! Determines when an incoming order can trade against the best resting
//! price on the opposite side. The test is strict on direction only:
//! equal prices always cross.

use types::numeric::Price;
use types::order::Side;

/// Check if an incoming order's price crosses a resting contra price.
pub fn crosses(incoming_side: Side, incoming_price: Price, resting_price: Price) -> bool {
    match incoming_side {
        Side::Buy => incoming_price >= resting_price,
        Side::Sell => incoming_price <= resting_price,
    }
}
