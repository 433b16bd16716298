//! Telegram Bot API delivery

use super::Notifier;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Telegram Bot API base URL
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Configuration for the Telegram notifier
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Base URL for the Bot API
    pub base_url: String,
    /// Bot token from @BotFather
    pub bot_token: String,
    /// Target chat or channel identifier
    pub chat_id: String,
    /// Request timeout
    pub timeout: Duration,
}

impl TelegramConfig {
    /// Production configuration for a bot token and chat id
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            base_url: TELEGRAM_API_URL.to_string(),
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// `sendMessage` request body
#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

/// Notifier delivering over the Telegram Bot API
pub struct TelegramNotifier {
    config: TelegramConfig,
    client: Client,
}

impl TelegramNotifier {
    /// Create a notifier for a bot token and chat id
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self::with_config(TelegramConfig::new(bot_token, chat_id))
    }

    /// Create a notifier with custom configuration
    pub fn with_config(config: TelegramConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.config.base_url, self.config.bot_token
        )
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn announce(&self, text: &str) -> anyhow::Result<()> {
        let body = SendMessageRequest {
            chat_id: &self.config.chat_id,
            text,
            parse_mode: "HTML",
        };

        let response = self
            .client
            .post(self.send_message_url())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Telegram API error: {} - {}", status, body);
        }

        Ok(())
    }
}
