//! Notification module
//!
//! Delivers alerts and the startup banner through a messaging channel.
//! The channel is a capability: when Telegram is not configured, the
//! no-op implementation stands in and alerts are only logged.

mod message;
mod telegram;

pub use message::{alert_message, log_line, startup_banner};
pub use telegram::{TelegramConfig, TelegramNotifier, TELEGRAM_API_URL};

use async_trait::async_trait;

/// Trait for notification channel implementations
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver free-form rich text to the configured channel
    async fn announce(&self, text: &str) -> anyhow::Result<()>;
}

/// Notifier that accepts and drops every message
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn announce(&self, _text: &str) -> anyhow::Result<()> {
        tracing::debug!("No notification channel configured, dropping message");
        Ok(())
    }
}
