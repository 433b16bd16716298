//! Poll loop orchestrator
//!
//! Owns all per-pair state and drives one fetch → record → evaluate →
//! notify pass per pair each cycle. Pairs are processed sequentially;
//! the inter-cycle suspension races against ctrl-c so shutdown is
//! observed between cycles or during the sleep.

use crate::config::{Config, SignalConfig};
use crate::exchange::PriceSource;
use crate::history::PriceHistory;
use crate::notify::{self, Notifier};
use crate::signal::{CrossoverEngine, Side};
use crate::telemetry::{self, Counter};
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Rolling state for one monitored pair
#[derive(Debug)]
pub struct PairState {
    /// Monitored pair (e.g. "BTC-USDT")
    pub symbol: String,
    /// Recent price observations
    pub history: PriceHistory,
    /// Last alerted crossover direction; only an opposite crossover
    /// can trigger the next alert
    pub last_signal: Option<Side>,
}

impl PairState {
    fn new(symbol: String, history_capacity: usize) -> Self {
        Self {
            symbol,
            history: PriceHistory::new(history_capacity),
            last_signal: None,
        }
    }
}

/// Crossover monitor over a price source and a notification channel
pub struct Monitor<S: PriceSource, N: Notifier> {
    source: S,
    notifier: N,
    engine: CrossoverEngine,
    signal: SignalConfig,
    pairs: Vec<PairState>,
    poll_interval: Duration,
}

impl<S: PriceSource, N: Notifier> Monitor<S, N> {
    /// Create a monitor for the configured pairs
    pub fn new(source: S, notifier: N, config: &Config) -> Self {
        let pairs = config
            .monitor
            .symbols
            .iter()
            .map(|symbol| PairState::new(symbol.clone(), config.signal.history_capacity))
            .collect();

        Self {
            source,
            notifier,
            engine: CrossoverEngine::new(&config.signal),
            signal: config.signal.clone(),
            pairs,
            poll_interval: Duration::from_secs(config.monitor.poll_interval_secs),
        }
    }

    /// Per-pair state, in poll order
    pub fn pairs(&self) -> &[PairState] {
        &self.pairs
    }

    /// Run until interrupted.
    ///
    /// Delivers the startup banner, then polls every interval. Ctrl-c
    /// during the suspension stops the loop gracefully.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let symbols: Vec<String> = self.pairs.iter().map(|p| p.symbol.clone()).collect();
        tracing::info!(pairs = %symbols.join(", "), interval_secs = self.poll_interval.as_secs(), "Monitor starting");
        self.deliver(&notify::startup_banner(&symbols)).await;

        let mut interval = tokio::time::interval(self.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Monitor stopped by user");
                    break;
                }
                _ = interval.tick() => {
                    self.poll_cycle().await;
                }
            }
        }

        Ok(())
    }

    /// Run a single polling pass over all configured pairs
    pub async fn poll_cycle(&mut self) {
        telemetry::increment(Counter::PollCycles);

        for i in 0..self.pairs.len() {
            let symbol = self.pairs[i].symbol.clone();

            let price = match self.source.fetch_price(&symbol).await {
                Ok(price) => price,
                Err(e) => {
                    telemetry::increment(Counter::FetchFailures);
                    tracing::warn!(symbol = %symbol, error = %e, "Failed to get price");
                    continue;
                }
            };

            if !self.pairs[i].history.record(price) {
                tracing::warn!(symbol = %symbol, price = %price, "Rejected non-positive price");
                continue;
            }
            tracing::debug!(symbol = %symbol, price = %price, samples = self.pairs[i].history.len(), "Recorded price");

            let alert =
                self.engine
                    .evaluate(&symbol, &self.pairs[i].history, self.pairs[i].last_signal);

            if let Some(alert) = alert {
                telemetry::increment(Counter::AlertsSent);
                tracing::info!(
                    symbol = %symbol,
                    side = %alert.side,
                    entry = %alert.entry,
                    sma = %alert.sma,
                    "Crossover alert"
                );

                self.deliver(&notify::alert_message(&alert, &self.signal)).await;
                // The transition stands even when delivery fails; the
                // channel is not part of the signal state machine.
                self.pairs[i].last_signal = Some(alert.side);
            }
        }
    }

    /// Deliver a message, mirroring it to the log; failures are
    /// logged and swallowed
    async fn deliver(&self, text: &str) {
        tracing::info!(message = %notify::log_line(text), "Notify");
        if let Err(e) = self.notifier.announce(text).await {
            telemetry::increment(Counter::DeliveryFailures);
            tracing::warn!(error = %e, "Notification delivery failed");
        }
    }
}
