//! Crossover detection
//!
//! Pure evaluation over a pair's price history: compute the SMA,
//! classify the crossover direction, and debounce against the last
//! alerted side. The engine holds no per-pair state; the orchestrator
//! owns history and signal state and passes them in.

use super::{Alert, Side};
use crate::config::SignalConfig;
use crate::history::PriceHistory;
use rust_decimal::Decimal;

/// Decimal places for protective levels
const LEVEL_PRECISION: u32 = 4;

/// Detects SMA crossovers and produces alerts
pub struct CrossoverEngine {
    sma_period: usize,
    stop_loss_pct: Decimal,
    take_profit_pct: Decimal,
}

impl CrossoverEngine {
    /// Create an engine from signal configuration
    pub fn new(config: &SignalConfig) -> Self {
        Self {
            sma_period: config.sma_period,
            stop_loss_pct: config.stop_loss_pct,
            take_profit_pct: config.take_profit_pct,
        }
    }

    /// Samples required before a crossover can be evaluated.
    ///
    /// One more than the SMA period, so a previous observation distinct
    /// from the current one exists.
    pub fn min_samples(&self) -> usize {
        self.sma_period + 1
    }

    /// Mean of the most recent `sma_period` prices, including the
    /// current one; `None` with fewer samples
    pub fn sma(&self, history: &PriceHistory) -> Option<Decimal> {
        let window = history.window(self.sma_period)?;
        Some(window.iter().sum::<Decimal>() / Decimal::from(self.sma_period))
    }

    /// Classify the crossover between two consecutive observations.
    ///
    /// Mutually exclusive, checked in order: BUY when the price crossed
    /// from at-or-below the average to strictly above, SELL for the
    /// symmetric case, otherwise no crossover this tick.
    pub fn classify(current: Decimal, previous: Decimal, sma: Decimal) -> Option<Side> {
        if current > sma && previous <= sma {
            Some(Side::Buy)
        } else if current < sma && previous >= sma {
            Some(Side::Sell)
        } else {
            None
        }
    }

    /// Stop-loss and take-profit levels for an entry, rounded to
    /// 4 decimal places
    pub fn protective_levels(&self, entry: Decimal, side: Side) -> (Decimal, Decimal) {
        let one = Decimal::ONE;
        let (stop_loss, take_profit) = match side {
            Side::Buy => (
                entry * (one - self.stop_loss_pct),
                entry * (one + self.take_profit_pct),
            ),
            Side::Sell => (
                entry * (one + self.stop_loss_pct),
                entry * (one - self.take_profit_pct),
            ),
        };
        (
            stop_loss.round_dp(LEVEL_PRECISION),
            take_profit.round_dp(LEVEL_PRECISION),
        )
    }

    /// Evaluate a pair's history against its last alerted side.
    ///
    /// Returns an alert only when a crossover is classified and its
    /// side differs from `last_signal`: repeated same-direction
    /// crossovers stay suppressed until the opposite side fires.
    pub fn evaluate(
        &self,
        symbol: &str,
        history: &PriceHistory,
        last_signal: Option<Side>,
    ) -> Option<Alert> {
        if history.len() < self.min_samples() {
            return None;
        }

        let sma = self.sma(history)?;
        let current = history.latest()?;
        let previous = history.previous()?;

        let side = Self::classify(current, previous, sma)?;
        if last_signal == Some(side) {
            return None;
        }

        let (stop_loss, take_profit) = self.protective_levels(current, side);
        Some(Alert::new(symbol, side, current, sma, stop_loss, take_profit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn engine() -> CrossoverEngine {
        CrossoverEngine::new(&SignalConfig::default())
    }

    fn history_of(prices: &[Decimal]) -> PriceHistory {
        let mut history = PriceHistory::default();
        for &price in prices {
            assert!(history.record(price));
        }
        history
    }

    #[test]
    fn test_no_signal_below_min_samples() {
        let engine = engine();
        // Ten entries ending in a would-be crossover pattern
        let mut prices = vec![dec!(100); 8];
        prices.push(dec!(90));
        prices.push(dec!(105));
        let history = history_of(&prices);

        assert_eq!(history.len(), 10);
        assert!(engine.evaluate("BTC-USDT", &history, None).is_none());
    }

    #[test]
    fn test_buy_crossover_at_eleven_samples() {
        let engine = engine();
        // [100]*9 + [90, 105]: SMA-10 = (800 + 90 + 105) / 10 = 99.5
        let mut prices = vec![dec!(100); 9];
        prices.push(dec!(90));
        prices.push(dec!(105));
        let history = history_of(&prices);

        let alert = engine.evaluate("BTC-USDT", &history, None).unwrap();
        assert_eq!(alert.side, Side::Buy);
        assert_eq!(alert.entry, dec!(105));
        assert_eq!(alert.sma, dec!(99.5));
        assert_eq!(alert.stop_loss, dec!(101.85));
        assert_eq!(alert.take_profit, dec!(110.25));
    }

    #[test]
    fn test_sell_crossover_at_eleven_samples() {
        let engine = engine();
        // [100]*9 + [110, 95]: SMA-10 = (800 + 110 + 95) / 10 = 100.5
        let mut prices = vec![dec!(100); 9];
        prices.push(dec!(110));
        prices.push(dec!(95));
        let history = history_of(&prices);

        let alert = engine.evaluate("ETH-USDT", &history, None).unwrap();
        assert_eq!(alert.side, Side::Sell);
        assert_eq!(alert.entry, dec!(95));
        assert_eq!(alert.sma, dec!(100.5));
    }

    #[test]
    fn test_no_crossover_when_both_above() {
        let engine = engine();
        // Hand-computed scenario: [90]*9 + [100, 101], SMA-10 = 92.1.
        // Previous (100) is already above the average, so no crossover
        // fires this tick.
        let mut prices = vec![dec!(90); 9];
        prices.push(dec!(100));
        prices.push(dec!(101));
        let history = history_of(&prices);

        assert_eq!(engine.sma(&history), Some(dec!(92.1)));
        assert!(engine.evaluate("BTC-USDT", &history, None).is_none());
    }

    #[test]
    fn test_classify_boundary_conditions() {
        // previous == sma counts as "from at-or-below" for BUY
        assert_eq!(
            CrossoverEngine::classify(dec!(101), dec!(100), dec!(100)),
            Some(Side::Buy)
        );
        // previous == sma counts as "from at-or-above" for SELL
        assert_eq!(
            CrossoverEngine::classify(dec!(99), dec!(100), dec!(100)),
            Some(Side::Sell)
        );
        // current == sma is never a crossover
        assert_eq!(
            CrossoverEngine::classify(dec!(100), dec!(99), dec!(100)),
            None
        );
    }

    #[test]
    fn test_debounce_suppresses_repeated_side() {
        let engine = engine();
        let mut prices = vec![dec!(100); 9];
        prices.push(dec!(90));
        prices.push(dec!(105));
        let history = history_of(&prices);

        // First crossover fires from the initial state
        let alert = engine.evaluate("BTC-USDT", &history, None).unwrap();
        assert_eq!(alert.side, Side::Buy);

        // Same side again is suppressed
        assert!(engine
            .evaluate("BTC-USDT", &history, Some(Side::Buy))
            .is_none());

        // The opposite prior side lets it through
        let alert = engine
            .evaluate("BTC-USDT", &history, Some(Side::Sell))
            .unwrap();
        assert_eq!(alert.side, Side::Buy);
    }

    #[test]
    fn test_protective_levels_buy() {
        let (stop_loss, take_profit) = engine().protective_levels(dec!(100.0), Side::Buy);
        assert_eq!(stop_loss, dec!(97.0000));
        assert_eq!(take_profit, dec!(105.0000));
    }

    #[test]
    fn test_protective_levels_sell() {
        let (stop_loss, take_profit) = engine().protective_levels(dec!(100.0), Side::Sell);
        assert_eq!(stop_loss, dec!(103.0000));
        assert_eq!(take_profit, dec!(95.0000));
    }

    #[test]
    fn test_protective_levels_rounding() {
        // 12345.6789 * 0.97 = 11975.308533 -> 11975.3085
        let (stop_loss, take_profit) = engine().protective_levels(dec!(12345.6789), Side::Buy);
        assert_eq!(stop_loss, dec!(11975.3085));
        // 12345.6789 * 1.05 = 12962.962845 -> 12962.9628
        assert_eq!(take_profit, dec!(12962.9628));
    }

    #[test]
    fn test_sma_insufficient_data() {
        let engine = engine();
        let history = history_of(&[dec!(1); 9]);
        assert!(engine.sma(&history).is_none());
    }

    #[test]
    fn test_flat_history_no_signal() {
        let engine = engine();
        let history = history_of(&[dec!(100); 20]);
        assert!(engine.evaluate("BTC-USDT", &history, None).is_none());
    }
}
