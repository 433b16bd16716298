//! BingX spot REST client
//!
//! Polls the public ticker-price endpoint. Requests carry the symbol,
//! a millisecond timestamp, and the static API key header; responses
//! go through the shape normalization in [`super::quote`].

use super::{quote, FetchError, PriceSource};
use crate::config::ExchangeConfig;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::Value;
use std::time::Duration;

/// BingX production API base URL
pub const BINGX_API_URL: &str = "https://open-api.bingx.com";

/// Ticker price endpoint path
const TICKER_PRICE_PATH: &str = "/openApi/spot/v1/ticker/price";

/// API key header name
const API_KEY_HEADER: &str = "X-BX-APIKEY";

/// Configuration for the BingX client
#[derive(Debug, Clone)]
pub struct BingxConfig {
    /// Base URL for the REST API
    pub base_url: String,
    /// API key sent with every request
    pub api_key: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for BingxConfig {
    fn default() -> Self {
        Self {
            base_url: BINGX_API_URL.to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl From<&ExchangeConfig> for BingxConfig {
    fn from(config: &ExchangeConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

/// Client for the BingX spot REST API
pub struct BingxClient {
    config: BingxConfig,
    client: Client,
}

impl BingxClient {
    /// Create a client with default configuration
    pub fn new() -> Self {
        Self::with_config(BingxConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: BingxConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Fetch the latest traded price for a symbol
    pub async fn fetch_ticker(&self, symbol: &str) -> Result<Decimal, FetchError> {
        let url = format!("{}{}", self.config.base_url, TICKER_PRICE_PATH);
        let timestamp = Utc::now().timestamp_millis().to_string();

        tracing::debug!(url = %url, symbol = %symbol, "Fetching ticker price");

        let response = self
            .client
            .get(&url)
            .query(&[("symbol", symbol), ("timestamp", timestamp.as_str())])
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let payload: Value = response.json().await?;

        match quote::extract_price(&payload) {
            Some(price) => Ok(price),
            None => {
                tracing::warn!(symbol = %symbol, payload = %payload, "Unrecognized price structure");
                Err(FetchError::UnrecognizedPayload)
            }
        }
    }
}

impl Default for BingxClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceSource for BingxClient {
    async fn fetch_price(&self, symbol: &str) -> Result<Decimal, FetchError> {
        self.fetch_ticker(symbol).await
    }
}
