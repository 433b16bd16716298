//! Rolling price history
//!
//! Bounded per-pair price window backing the crossover engine. Oldest
//! entries are dropped unconditionally once capacity is reached.

use rust_decimal::Decimal;
use std::collections::VecDeque;

/// Default number of retained observations per pair
pub const DEFAULT_CAPACITY: usize = 50;

/// Bounded sequence of recent prices for one pair, newest at the back
#[derive(Debug, Clone)]
pub struct PriceHistory {
    prices: VecDeque<Decimal>,
    capacity: usize,
}

impl PriceHistory {
    /// Create a history bounded to `capacity` observations
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be > 0");
        Self {
            prices: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a price observation.
    ///
    /// Returns `false` without recording when the price is not
    /// strictly positive. On overflow the oldest entries are dropped.
    pub fn record(&mut self, price: Decimal) -> bool {
        if price <= Decimal::ZERO {
            return false;
        }
        self.prices.push_back(price);
        while self.prices.len() > self.capacity {
            self.prices.pop_front();
        }
        true
    }

    /// The last `n` prices in arrival order, or `None` if fewer exist
    pub fn window(&self, n: usize) -> Option<Vec<Decimal>> {
        if self.prices.len() < n {
            return None;
        }
        Some(
            self.prices
                .iter()
                .skip(self.prices.len() - n)
                .copied()
                .collect(),
        )
    }

    /// Most recent price
    pub fn latest(&self) -> Option<Decimal> {
        self.prices.back().copied()
    }

    /// Second-most-recent price
    pub fn previous(&self) -> Option<Decimal> {
        self.prices.iter().rev().nth(1).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl Default for PriceHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
