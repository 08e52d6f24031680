//! Matching engine core
//!
//! Owns both book sides and exposes the single mutating entry point,
//! [`MatchingEngine::process`]. Processing runs to completion on the
//! caller's thread; there is no internal concurrency, and all calls for
//! one book must be serialized by the caller, because price-time
//! priority is a total order over the submission sequence.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};
use types::trade::Trade;

use crate::book::BookSide;
use crate::matching::crossing;

/// Single-instrument matching engine.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    bids: BookSide,
    asks: BookSide,
}

impl MatchingEngine {
    /// Create an engine with an empty book.
    pub fn new() -> Self {
        Self {
            bids: BookSide::bids(),
            asks: BookSide::asks(),
        }
    }

    /// Process one incoming order against the book.
    ///
    /// The order is matched against the contra side while its price
    /// crosses, trades against the same resting counterparty are
    /// coalesced into one record, and any unexecuted remainder rests at
    /// the back of its price level. Returns the aggregated trades in
    /// first-fill order (possibly empty).
    pub fn process(&mut self, mut order: Order) -> Vec<Trade> {
        let contra_side = match order.side() {
            Side::Buy => &mut self.asks,
            Side::Sell => &mut self.bids,
        };
        let trades = Self::match_order(contra_side, &mut order);

        if !order.remaining_quantity().is_zero() {
            let own_side = match order.side() {
                Side::Buy => &mut self.bids,
                Side::Sell => &mut self.asks,
            };
            own_side.insert(order);
        }

        trades
    }

    /// Consume resting liquidity with `aggressor` until its quantity is
    /// exhausted or the contra side no longer crosses.
    fn match_order(contra_side: &mut BookSide, aggressor: &mut Order) -> Vec<Trade> {
        let mut trades = Vec::new();
        // First emitted trade slot per resting counterparty, so repeat
        // fills against a refilling iceberg fold into one record.
        let mut slot_by_passive_id: HashMap<OrderId, usize> = HashMap::new();

        while !aggressor.remaining_quantity().is_zero() {
            let Some(level_price) = contra_side.best_price() else {
                break;
            };
            if !crossing::crosses(aggressor.side(), aggressor.price(), level_price) {
                break;
            }

            let level = contra_side
                .best_level_mut()
                .expect("non-empty side has a best level");
            let (passive_id, offered) = {
                let passive = level.front().expect("book levels are never empty");
                (passive.id(), passive.visible_volume())
            };

            if offered <= aggressor.remaining_quantity() {
                // The passive order's entire offered slice is consumed.
                Self::record_fill(
                    &mut trades,
                    &mut slot_by_passive_id,
                    aggressor,
                    passive_id,
                    level_price,
                    offered,
                );
                aggressor.consume_as_aggressor(offered);

                let mut passive = level.pop_front().expect("book levels are never empty");
                passive.consume_as_passive(offered);
                if !passive.remaining_quantity().is_zero() {
                    // Refilled iceberg: a fresh slice surfaced, so the
                    // order re-enters its own level at the tail.
                    level.push_back(passive);
                } else if level.is_empty() {
                    contra_side.remove_level_if_empty(level_price);
                }
            } else {
                // Aggressor exhausted; the passive order keeps the front
                // of its queue with a reduced slice.
                let take = aggressor.remaining_quantity();
                Self::record_fill(
                    &mut trades,
                    &mut slot_by_passive_id,
                    aggressor,
                    passive_id,
                    level_price,
                    take,
                );
                level
                    .front_mut()
                    .expect("book levels are never empty")
                    .consume_as_passive(take);
                aggressor.consume_as_aggressor(take);
            }
        }

        trades
    }

    /// Record one raw fill, merging it into the trade already kept for
    /// the same resting counterparty if there is one.
    fn record_fill(
        trades: &mut Vec<Trade>,
        slot_by_passive_id: &mut HashMap<OrderId, usize>,
        aggressor: &Order,
        passive_id: OrderId,
        price: Price,
        quantity: Quantity,
    ) {
        match slot_by_passive_id.entry(passive_id) {
            Entry::Occupied(slot) => {
                let kept = &mut trades[*slot.get()];
                *kept = Trade::new(
                    kept.buy_order_id,
                    kept.sell_order_id,
                    kept.price,
                    kept.quantity + quantity,
                );
            }
            Entry::Vacant(slot) => {
                let (buy_order_id, sell_order_id) = match aggressor.side() {
                    Side::Buy => (aggressor.id(), passive_id),
                    Side::Sell => (passive_id, aggressor.id()),
                };
                slot.insert(trades.len());
                trades.push(Trade::new(buy_order_id, sell_order_id, price, quantity));
            }
        }
    }

    /// Resting bids in display priority order (highest price first,
    /// then arrival order).
    pub fn bids(&self) -> impl Iterator<Item = &Order> {
        self.bids.orders()
    }

    /// Resting asks in display priority order (lowest price first,
    /// then arrival order).
    pub fn asks(&self) -> impl Iterator<Item = &Order> {
        self.asks.orders()
    }

    /// The bid side of the book.
    pub fn bid_side(&self) -> &BookSide {
        &self.bids
    }

    /// The ask side of the book.
    pub fn ask_side(&self) -> &BookSide {
        &self.asks
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}
