//! Order sides, variants, and consumption operations
//!
//! An order is either a plain limit order or an iceberg order. The two
//! differ only in how much of the remaining quantity is offered to the
//! market at once, and in what happens to that offer when the order is
//! consumed while resting. The variant set is closed, so the matching
//! loop selects behavior by pattern match instead of dynamic dispatch.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side (buyer or seller).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Get the opposite side.
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Variant-specific order state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderKind {
    /// Plain limit order: the full remaining quantity is always offered.
    Limit,
    /// Iceberg order: only `visible` of the remaining quantity is
    /// offered; a fresh slice of up to `peak` surfaces when the current
    /// one is fully consumed.
    Iceberg { peak: Quantity, visible: Quantity },
}

/// A resting or incoming order.
///
/// Owned by value: by the processing call while matching, and by exactly
/// one price level while resting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    side: Side,
    id: OrderId,
    price: Price,
    remaining: Quantity,
    kind: OrderKind,
}

impl Order {
    /// Create a plain limit order.
    ///
    /// # Panics
    /// Panics on negative price or quantity.
    pub fn limit(side: Side, id: OrderId, price: Price, quantity: Quantity) -> Self {
        assert!(price.ticks() >= 0, "negative limit price");
        assert!(quantity.as_i64() >= 0, "negative order quantity");
        Self {
            side,
            id,
            price,
            remaining: quantity,
            kind: OrderKind::Limit,
        }
    }

    /// Create an iceberg order with the given peak size.
    ///
    /// The initial visible slice is `min(quantity, peak)`.
    ///
    /// # Panics
    /// Panics on negative price or quantity, or a non-positive peak.
    pub fn iceberg(side: Side, id: OrderId, price: Price, quantity: Quantity, peak: Quantity) -> Self {
        assert!(price.ticks() >= 0, "negative limit price");
        assert!(quantity.as_i64() >= 0, "negative order quantity");
        assert!(peak.as_i64() > 0, "iceberg peak must be positive");
        Self {
            side,
            id,
            price,
            remaining: quantity,
            kind: OrderKind::Iceberg {
                peak,
                visible: quantity.min(peak),
            },
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Total quantity not yet matched.
    pub fn remaining_quantity(&self) -> Quantity {
        self.remaining
    }

    /// The variant discriminant and its state.
    pub fn kind(&self) -> &OrderKind {
        &self.kind
    }

    /// True once nothing is left to match.
    pub fn is_filled(&self) -> bool {
        self.remaining.is_zero()
    }

    /// The quantity currently offered to the market: the full remainder
    /// for a limit order, the visible slice for an iceberg.
    pub fn visible_volume(&self) -> Quantity {
        match self.kind {
            OrderKind::Limit => self.remaining,
            OrderKind::Iceberg { visible, .. } => visible,
        }
    }

    /// Consume quantity from this order acting as the aggressor.
    ///
    /// Only the running total matters for an aggressor; an iceberg's
    /// hidden reserve never rests mid-match, so there is no refill here.
    /// The visible slice is clamped so it cannot exceed the remainder.
    ///
    /// # Panics
    /// Panics unless `0 < amount <= remaining_quantity()`.
    pub fn consume_as_aggressor(&mut self, amount: Quantity) {
        assert!(
            amount > Quantity::ZERO && amount <= self.remaining,
            "aggressor consumption of {amount} exceeds remaining {}",
            self.remaining
        );
        self.remaining -= amount;
        if let OrderKind::Iceberg { visible, .. } = &mut self.kind {
            *visible = (*visible).min(self.remaining);
        }
    }

    /// Consume quantity from this order resting passively.
    ///
    /// For an iceberg, exhausting the visible slice while quantity
    /// remains triggers a refill to `min(remaining, peak)`. The caller
    /// observing a nonzero remainder after a pop must re-queue the order
    /// at the tail of its level: a refill forfeits time priority.
    ///
    /// # Panics
    /// Panics unless `0 < amount <= visible_volume()`.
    pub fn consume_as_passive(&mut self, amount: Quantity) {
        assert!(
            amount > Quantity::ZERO && amount <= self.visible_volume(),
            "passive consumption of {amount} exceeds offered {}",
            self.visible_volume()
        );
        self.remaining -= amount;
        if let OrderKind::Iceberg { peak, visible } = &mut self.kind {
            *visible -= amount;
            if visible.is_zero() && !self.remaining.is_zero() {
                *visible = self.remaining.min(*peak);
            }
        }
    }
}
