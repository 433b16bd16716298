//! Alert and banner formatting
//!
//! HTML-formatted message bodies for the messaging channel. Emoji are
//! literal content, numbers carry 4 decimal places, timestamps are UTC.

use crate::config::SignalConfig;
use crate::signal::{Alert, Side};
use rust_decimal_macros::dec;

/// One-time startup banner listing the monitored pairs
pub fn startup_banner(symbols: &[String]) -> String {
    format!(
        "<b>BingX Multi-Pair Monitor Started</b>\nMonitoring: {}",
        symbols.join(", ")
    )
}

/// Format a crossover alert for delivery.
///
/// Includes side, pair, entry, SMA, and both protective levels with
/// their signed percentage offsets.
pub fn alert_message(alert: &Alert, signal: &SignalConfig) -> String {
    let hundred = dec!(100);
    let stop_pct = (signal.stop_loss_pct * hundred).normalize();
    let take_pct = (signal.take_profit_pct * hundred).normalize();
    let (stop_offset, take_offset) = match alert.side {
        Side::Buy => (-stop_pct, take_pct),
        Side::Sell => (stop_pct, -take_pct),
    };

    format!(
        "<b>🚨 {side} Signal • {symbol}</b>\n\
         📈 Entry: {entry:.4}\n\
         📊 SMA-{period}: {sma:.4}\n\
         🛑 Stop Loss: {stop:.4} ({stop_offset}%)\n\
         🎯 Take Profit: {take:.4} ({take_offset}%)\n\
         ⏰ {timestamp} UTC",
        side = alert.side,
        symbol = alert.symbol,
        entry = alert.entry,
        period = signal.sma_period,
        sma = alert.sma,
        stop = alert.stop_loss,
        stop_offset = stop_offset,
        take = alert.take_profit,
        take_offset = take_offset,
        timestamp = alert.timestamp.format("%Y-%m-%d %H:%M:%S"),
    )
}

/// Flatten a multi-line message for single-line log mirroring
pub fn log_line(text: &str) -> String {
    text.replace('\n', " | ")
}
