use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

/// Sink for the per-cycle digest. The watcher never lets a delivery
/// failure escape; implementations report transport errors and the
/// loop logs and moves on.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<()>;
}

/// Telegram Bot API notifier. Sends the digest as one Markdown message
/// to a fixed chat.
pub struct TelegramNotifier {
    client: Client,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            token: token.into(),
            chat_id: chat_id.into(),
        })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.token);

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "chat_id": self.chat_id,
                "text": text,
                "parse_mode": "Markdown",
            }))
            .send()
            .await
            .context("Failed to reach Telegram")?;

        let status = response.status();
        if status.is_success() {
            debug!("Digest delivered to chat {}", self.chat_id);
        } else {
            // Telegram puts the failure reason in the body.
            let body = response.text().await.unwrap_or_default();
            warn!("Telegram rejected message: {} {}", status, body);
        }

        Ok(())
    }
}
