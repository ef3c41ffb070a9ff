use super::{INotificationChannel, InboundMessage};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use tracing::{debug, error, info};

#[derive(Debug, Deserialize)]
struct TelegramResponse<T> {
    ok: bool,
    #[serde(default)]
    result: Option<T>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TelegramUpdate {
    update_id: i64,
    #[serde(default)]
    message: Option<TelegramMessage>,
}

#[derive(Debug, Deserialize)]
struct TelegramMessage {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    chat: Option<TelegramChat>,
}

#[derive(Debug, Deserialize)]
struct TelegramChat {
    id: i64,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

/// Long polling client of the Telegram Bot HTTP api
pub struct TelegramBotApi {
    client: Client,
    base_url: String,
    token: String,
    poll_timeout_secs: u64,
    request_timeout_secs: u64,
    /// Highest update id seen + 1. Lives as long as the process.
    next_update_id: AtomicI64,
}

impl TelegramBotApi {
    pub fn new(
        base_url: &str,
        token: String,
        poll_timeout_secs: u64,
        request_timeout_secs: u64,
    ) -> Self {
        let client = Client::new();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            poll_timeout_secs,
            request_timeout_secs,
            next_update_id: AtomicI64::new(0),
        }
    }

    pub fn next_update_id(&self) -> i64 {
        self.next_update_id.load(Ordering::SeqCst)
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    async fn get_updates(&self) -> anyhow::Result<Vec<TelegramUpdate>> {
        let offset = self.next_update_id();
        let res = self
            .client
            .get(&self.method_url("getUpdates"))
            .query(&[
                ("offset", offset.to_string()),
                ("timeout", self.poll_timeout_secs.to_string()),
            ])
            .timeout(Duration::from_secs(
                self.request_timeout_secs + self.poll_timeout_secs,
            ))
            .send()
            .await?
            .json::<TelegramResponse<Vec<TelegramUpdate>>>()
            .await?;

        if !res.ok {
            anyhow::bail!(
                "getUpdates was rejected: {}",
                res.description.unwrap_or_default()
            );
        }
        Ok(res.result.unwrap_or_default())
    }

    async fn send_message(&self, chat_id: &str, text: &str) -> anyhow::Result<()> {
        let body = SendMessageRequest {
            chat_id,
            text,
            parse_mode: "Markdown",
        };
        let res = self
            .client
            .post(&self.method_url("sendMessage"))
            .json(&body)
            .timeout(Duration::from_secs(self.request_timeout_secs))
            .send()
            .await?
            .json::<TelegramResponse<serde_json::Value>>()
            .await?;

        if !res.ok {
            anyhow::bail!(
                "sendMessage was rejected: {}",
                res.description.unwrap_or_default()
            );
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl INotificationChannel for TelegramBotApi {
    async fn send(&self, chat_id: &str, text: &str) {
        if chat_id.is_empty() {
            debug!("No chat to send the message to, skipping: {}", text);
            return;
        }
        match self.send_message(chat_id, text).await {
            Ok(_) => info!("Telegram message sent to chat: {}", chat_id),
            Err(e) => error!(
                "Failed to send Telegram message to chat: {}. Error message: {:?}",
                chat_id, e
            ),
        }
    }

    async fn poll_inbound(&self) -> Vec<InboundMessage> {
        let updates = match self.get_updates().await {
            Ok(updates) => updates,
            Err(e) => {
                debug!("Polling Telegram updates failed. Error message: {:?}", e);
                return Vec::new();
            }
        };

        let mut messages = Vec::with_capacity(updates.len());
        for update in updates {
            self.next_update_id
                .fetch_max(update.update_id + 1, Ordering::SeqCst);

            let message = match update.message {
                Some(message) => message,
                None => continue,
            };
            match (message.chat, message.text) {
                (Some(chat), Some(text)) => messages.push(InboundMessage {
                    chat_id: chat.id.to_string(),
                    text,
                }),
                _ => continue,
            }
        }
        messages
    }
}
