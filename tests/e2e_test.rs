//! End-to-end tests over the crate's public API

use bingx_monitor::config::Config;
use bingx_monitor::history::PriceHistory;
use bingx_monitor::notify::{alert_message, startup_banner};
use bingx_monitor::signal::{CrossoverEngine, Side};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_example_config_loads() {
    let config = Config::load("config.toml.example").unwrap();

    assert_eq!(
        config.monitor.symbols,
        vec!["BTC-USDT", "ETH-USDT", "XRP-USDT"]
    );
    assert_eq!(config.monitor.poll_interval_secs, 60);
    assert_eq!(config.signal.sma_period, 10);
    assert_eq!(config.signal.history_capacity, 50);
    assert!(config.telegram.is_some());

    // The shipped example is all placeholders and the check says so
    let issues = config.placeholder_issues();
    assert!(issues.iter().any(|i| i.contains("api_key")));
    assert!(issues.iter().any(|i| i.contains("bot_token")));
    assert!(issues.iter().any(|i| i.contains("chat_id")));
}

#[test]
fn test_history_to_alert_pipeline() {
    let config = Config::default();
    let engine = CrossoverEngine::new(&config.signal);
    let mut history = PriceHistory::new(config.signal.history_capacity);

    // Nine flat ticks, a dip, then a pop above the average
    for _ in 0..9 {
        assert!(history.record(dec!(100)));
    }
    assert!(history.record(dec!(90)));
    assert!(engine.evaluate("BTC-USDT", &history, None).is_none());

    assert!(history.record(dec!(105)));
    let alert = engine.evaluate("BTC-USDT", &history, None).unwrap();

    assert_eq!(alert.side, Side::Buy);
    assert_eq!(alert.entry, dec!(105));
    assert_eq!(alert.sma, dec!(99.5));
    assert_eq!(alert.stop_loss, dec!(101.85));
    assert_eq!(alert.take_profit, dec!(110.25));

    let text = alert_message(&alert, &config.signal);
    assert!(text.contains("🚨 BUY Signal • BTC-USDT"));
    assert!(text.contains("📈 Entry: 105.0000"));
    assert!(text.contains("📊 SMA-10: 99.5000"));
    assert!(text.contains("🛑 Stop Loss: 101.8500 (-3%)"));
    assert!(text.contains("🎯 Take Profit: 110.2500 (5%)"));
}

#[test]
fn test_buy_then_sell_then_buy_sequence() {
    let config = Config::default();
    let engine = CrossoverEngine::new(&config.signal);
    let mut history = PriceHistory::new(config.signal.history_capacity);
    let mut last_signal: Option<Side> = None;
    let mut alerts = Vec::new();

    // Drive a price path that crosses up, retests up (suppressed),
    // crosses down, then crosses up again
    let path: Vec<Decimal> = vec![
        dec!(100),
        dec!(100),
        dec!(100),
        dec!(100),
        dec!(100),
        dec!(100),
        dec!(100),
        dec!(100),
        dec!(100),
        dec!(90),  // drags the average below the flat level
        dec!(105), // BUY: crosses above from below
        dec!(104), // still above, nothing
        dec!(80),  // SELL: crosses below
        dec!(110), // BUY again after the opposite side
    ];

    for price in path {
        assert!(history.record(price));
        if let Some(alert) = engine.evaluate("BTC-USDT", &history, last_signal) {
            last_signal = Some(alert.side);
            alerts.push(alert);
        }
    }

    let sides: Vec<Side> = alerts.iter().map(|a| a.side).collect();
    assert_eq!(sides, vec![Side::Buy, Side::Sell, Side::Buy]);
}

#[test]
fn test_startup_banner_round_trip() {
    let config = Config::default();
    let banner = startup_banner(&config.monitor.symbols);
    assert!(banner.contains("BTC-USDT, ETH-USDT, XRP-USDT"));
}
