//! Price level implementation with FIFO queue
//!
//! A price level contains all resting orders at one price, in arrival
//! order. Appending to the tail is the only insertion path, so queue
//! position is time priority. The matching loop is the only consumer of
//! the head.

use std::collections::VecDeque;
use types::numeric::Price;
use types::order::Order;

/// A price level containing orders at a specific price.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    price: Price,
    orders: VecDeque<Order>,
}

impl PriceLevel {
    /// Create a new empty price level.
    pub fn new(price: Price) -> Self {
        Self {
            price,
            orders: VecDeque::new(),
        }
    }

    /// The price shared by every order in this level.
    pub fn price(&self) -> Price {
        self.price
    }

    /// Append an order at the back of the queue (lowest time priority).
    ///
    /// # Panics
    /// Panics if the order's price does not match the level's.
    pub fn push_back(&mut self, order: Order) {
        assert!(
            order.price() == self.price,
            "order price {} pushed onto level priced {}",
            order.price(),
            self.price
        );
        self.orders.push_back(order);
    }

    /// Peek at the front order without removing it.
    pub fn front(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Mutable access to the front order, for partial in-place fills.
    pub fn front_mut(&mut self) -> Option<&mut Order> {
        self.orders.front_mut()
    }

    /// Pop the front order off the queue.
    pub fn pop_front(&mut self) -> Option<Order> {
        self.orders.pop_front()
    }

    /// Check if the level holds no orders.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Number of orders at this level.
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Iterate the queued orders in time-priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }
}
