//! Signal types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Alert direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Price crossed from at-or-below the SMA to above it
    Buy,
    /// Price crossed from at-or-above the SMA to below it
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// A crossover alert
///
/// Created by the engine when a crossover changes a pair's signal
/// state; consumed once by the notifier and not retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Unique alert identifier
    pub id: Uuid,
    /// Monitored pair (e.g. "BTC-USDT")
    pub symbol: String,
    /// Crossover direction
    pub side: Side,
    /// Price at detection time
    pub entry: Decimal,
    /// Moving average the price crossed
    pub sma: Decimal,
    /// Protective stop level, rounded to 4 decimal places
    pub stop_loss: Decimal,
    /// Profit target level, rounded to 4 decimal places
    pub take_profit: Decimal,
    /// Detection timestamp
    pub timestamp: DateTime<Utc>,
}

impl Alert {
    /// Create a new alert stamped with the current time
    pub fn new(
        symbol: impl Into<String>,
        side: Side,
        entry: Decimal,
        sma: Decimal,
        stop_loss: Decimal,
        take_profit: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into(),
            side,
            entry,
            sma,
            stop_loss,
            take_profit,
            timestamp: Utc::now(),
        }
    }
}
