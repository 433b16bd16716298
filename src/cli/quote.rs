//! Quote command implementation
//!
//! One-shot price fetch, useful as a connectivity check before
//! leaving the monitor running.

use crate::config::Config;
use crate::exchange::{BingxClient, BingxConfig, PriceSource};
use clap::Args;

#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Fetch a single symbol instead of the configured set
    #[arg(short, long)]
    pub symbol: Option<String>,
}

impl QuoteArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let client = BingxClient::with_config(BingxConfig::from(&config.exchange));

        let symbols = match &self.symbol {
            Some(symbol) => vec![symbol.clone()],
            None => config.monitor.symbols.clone(),
        };

        for symbol in &symbols {
            match client.fetch_price(symbol).await {
                Ok(price) => println!("{}: {}", symbol, price),
                Err(e) => println!("{}: unavailable ({})", symbol, e),
            }
        }

        Ok(())
    }
}
