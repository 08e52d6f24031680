//! Price-ordered book sides
//!
//! One `BookSide` holds all resting orders for one side of the book,
//! keyed by price. `BTreeMap` gives deterministic sorted iteration; the
//! priority direction is fixed at construction (bids read the map from
//! the high end, asks from the low end), so a single type serves both
//! sides of the book.

use std::collections::BTreeMap;

use types::numeric::Price;
use types::order::{Order, Side};

use super::price_level::PriceLevel;

/// One side (bid or ask) of the order book.
#[derive(Debug, Clone)]
pub struct BookSide {
    side: Side,
    levels: BTreeMap<Price, PriceLevel>,
}

impl BookSide {
    /// Create the bid side: best level is the highest price.
    pub fn bids() -> Self {
        Self {
            side: Side::Buy,
            levels: BTreeMap::new(),
        }
    }

    /// Create the ask side: best level is the lowest price.
    pub fn asks() -> Self {
        Self {
            side: Side::Sell,
            levels: BTreeMap::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of non-empty price levels.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// The most competitive price on this side, if any.
    pub fn best_price(&self) -> Option<Price> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    /// Mutable access to the best level.
    pub(crate) fn best_level_mut(&mut self) -> Option<&mut PriceLevel> {
        match self.side {
            Side::Buy => self.levels.values_mut().next_back(),
            Side::Sell => self.levels.values_mut().next(),
        }
    }

    /// Insert a resting order at the back of its price level, creating
    /// the level if this is the first order at that price.
    ///
    /// # Panics
    /// Panics if the order belongs to the opposite side or has nothing
    /// left to match; fully filled orders never rest.
    pub fn insert(&mut self, order: Order) {
        assert!(
            order.side() == self.side,
            "{} order inserted into the {} side",
            order.side(),
            self.side
        );
        assert!(
            !order.remaining_quantity().is_zero(),
            "fully filled order inserted into the book"
        );
        self.levels
            .entry(order.price())
            .or_insert_with(|| PriceLevel::new(order.price()))
            .push_back(order);
    }

    /// Drop the level at `price` if it has become empty.
    ///
    /// The matching loop calls this after every pop that drains a level,
    /// so no empty level is ever observable from outside a call.
    pub fn remove_level_if_empty(&mut self, price: Price) {
        if self
            .levels
            .get(&price)
            .is_some_and(|level| level.is_empty())
        {
            self.levels.remove(&price);
        }
    }

    /// Iterate the levels in priority order (best first).
    pub fn levels(&self) -> Box<dyn Iterator<Item = &PriceLevel> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.values().rev()),
            Side::Sell => Box::new(self.levels.values()),
        }
    }

    /// Iterate all resting orders in display priority order: by level
    /// price, then by queue position.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.levels().flat_map(PriceLevel::iter)
    }
}
