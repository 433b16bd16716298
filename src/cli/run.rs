//! Run command implementation

use crate::config::Config;
use crate::exchange::{BingxClient, BingxConfig};
use crate::monitor::Monitor;
use crate::notify::{NoopNotifier, TelegramNotifier};
use clap::Args;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Override the poll interval in seconds
    #[arg(long)]
    pub interval: Option<u64>,
}

impl RunArgs {
    pub async fn execute(&self, mut config: Config) -> anyhow::Result<()> {
        if let Some(secs) = self.interval {
            config.monitor.poll_interval_secs = secs;
        }

        for issue in config.placeholder_issues() {
            tracing::warn!(issue = %issue, "Configuration looks unfinished");
        }

        let source = BingxClient::with_config(BingxConfig::from(&config.exchange));

        match &config.telegram {
            Some(telegram) => {
                let notifier =
                    TelegramNotifier::new(telegram.bot_token.clone(), telegram.chat_id.clone());
                Monitor::new(source, notifier, &config).run().await
            }
            None => {
                tracing::warn!("Telegram is not configured, alerts will only be logged");
                Monitor::new(source, NoopNotifier, &config).run().await
            }
        }
    }
}
