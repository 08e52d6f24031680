//! Trade execution records
//!
//! One trade reports one fill (possibly aggregated across iceberg
//! refills) between a buy and a sell order. Trades are immutable once
//! created and owned by the caller of the processing call that produced
//! them.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// An executed trade between two orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
}

impl Trade {
    /// Create a trade record.
    ///
    /// # Panics
    /// Panics on a non-positive quantity; zero-quantity fills are never
    /// reported.
    pub fn new(
        buy_order_id: OrderId,
        sell_order_id: OrderId,
        price: Price,
        quantity: Quantity,
    ) -> Self {
        assert!(quantity.as_i64() > 0, "trade quantity must be positive");
        Self {
            buy_order_id,
            sell_order_id,
            price,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_fields() {
        let trade = Trade::new(
            OrderId::new(100322),
            OrderId::new(100345),
            Price::new(5103),
            Quantity::new(7500),
        );
        assert_eq!(trade.buy_order_id, OrderId::new(100322));
        assert_eq!(trade.sell_order_id, OrderId::new(100345));
        assert_eq!(trade.price, Price::new(5103));
        assert_eq!(trade.quantity, Quantity::new(7500));
    }

    #[test]
    #[should_panic(expected = "trade quantity must be positive")]
    fn test_zero_quantity_trade_rejected() {
        let _ = Trade::new(
            OrderId::new(1),
            OrderId::new(2),
            Price::new(100),
            Quantity::ZERO,
        );
    }
}
