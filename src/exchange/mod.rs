//! Exchange price source module
//!
//! Fetches the latest traded price for a pair from the BingX spot
//! REST API and normalizes the response into a single decimal.

mod bingx;
mod quote;
mod types;

pub use bingx::{BingxClient, BingxConfig, BINGX_API_URL};
pub use quote::extract_price;
pub use types::FetchError;

use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait for price source implementations
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the latest traded price for a symbol
    async fn fetch_price(&self, symbol: &str) -> Result<Decimal, FetchError>;
}
