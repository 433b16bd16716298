//! Configuration types for bingx-monitor

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::exchange::BINGX_API_URL;

/// Root configuration structure
///
/// Every section carries defaults, so a missing or partial file still
/// yields a runnable configuration (with placeholder credentials that
/// `placeholder_issues` will flag).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub monitor: MonitorConfig,
    #[serde(default)]
    pub exchange: ExchangeConfig,
    #[serde(default)]
    pub signal: SignalConfig,
    /// Absent section disables Telegram delivery (alerts are only logged)
    #[serde(default)]
    pub telegram: Option<TelegramConfig>,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Poll loop configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorConfig {
    /// Spot pairs to monitor, in poll order
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,

    /// Seconds between poll cycles
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

fn default_symbols() -> Vec<String> {
    vec![
        "BTC-USDT".to_string(),
        "ETH-USDT".to_string(),
        "XRP-USDT".to_string(),
    ]
}
fn default_poll_interval() -> u64 {
    60
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            symbols: default_symbols(),
            poll_interval_secs: default_poll_interval(),
        }
    }
}

/// BingX REST API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sent as the `X-BX-APIKEY` header on every request
    #[serde(default)]
    pub api_key: String,

    /// Unused by the public ticker endpoint; kept for account parity
    #[serde(default)]
    pub api_secret: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    BINGX_API_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            api_secret: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Crossover engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SignalConfig {
    /// Moving average period
    #[serde(default = "default_sma_period")]
    pub sma_period: usize,

    /// Maximum retained price observations per pair
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Stop-loss offset from entry (0.03 = 3%)
    #[serde(default = "default_stop_loss_pct")]
    pub stop_loss_pct: Decimal,

    /// Take-profit offset from entry (0.05 = 5%)
    #[serde(default = "default_take_profit_pct")]
    pub take_profit_pct: Decimal,
}

fn default_sma_period() -> usize {
    10
}
fn default_history_capacity() -> usize {
    50
}
fn default_stop_loss_pct() -> Decimal {
    Decimal::new(3, 2) // 0.03 = 3%
}
fn default_take_profit_pct() -> Decimal {
    Decimal::new(5, 2) // 0.05 = 5%
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            sma_period: default_sma_period(),
            history_capacity: default_history_capacity(),
            stop_loss_pct: default_stop_loss_pct(),
            take_profit_pct: default_take_profit_pct(),
        }
    }
}

/// Telegram delivery configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// Chat or channel identifier (numeric id or @channel)
    pub chat_id: String,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Prometheus exporter port; absent disables the exporter
    #[serde(default)]
    pub metrics_port: Option<u16>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            metrics_port: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Report configuration values that still look like placeholders.
    ///
    /// A value is considered unfinished when it is empty or contains
    /// `your_` (the marker used throughout `config.toml.example`).
    /// These are warnings, never hard failures.
    pub fn placeholder_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if is_placeholder(&self.exchange.api_key) {
            issues.push("exchange.api_key is not set".to_string());
        }
        if let Some(telegram) = &self.telegram {
            if is_placeholder(&telegram.bot_token) {
                issues.push("telegram.bot_token is not set".to_string());
            }
            if is_placeholder(&telegram.chat_id) {
                issues.push("telegram.chat_id is not set".to_string());
            }
        }
        if self.monitor.symbols.is_empty() {
            issues.push("monitor.symbols is empty".to_string());
        }

        issues
    }
}

fn is_placeholder(value: &str) -> bool {
    value.trim().is_empty() || value.contains("your_")
}
