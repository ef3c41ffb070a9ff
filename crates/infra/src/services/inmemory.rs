use super::{INotificationChannel, InboundMessage};
use std::collections::VecDeque;
use std::sync::Mutex;
use tracing::debug;

/// Channel used when the bot is disabled. Nothing leaves the process.
pub struct DisabledNotificationChannel {}

#[async_trait::async_trait]
impl INotificationChannel for DisabledNotificationChannel {
    async fn send(&self, chat_id: &str, text: &str) {
        debug!(
            "Notification channel disabled, dropping message to {}: {}",
            chat_id, text
        );
    }

    async fn poll_inbound(&self) -> Vec<InboundMessage> {
        Vec::new()
    }
}

/// Channel keeping everything in memory, inbound messages are queued
/// with `push_inbound` and outbound ones recorded for inspection
#[derive(Default)]
pub struct InMemoryNotificationChannel {
    sent: Mutex<Vec<(String, String)>>,
    inbound: Mutex<VecDeque<InboundMessage>>,
}

impl InMemoryNotificationChannel {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push_inbound(&self, chat_id: &str, text: &str) {
        self.inbound
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(InboundMessage {
                chat_id: chat_id.to_string(),
                text: text.to_string(),
            });
    }

    /// `(chat_id, text)` of every message sent so far
    pub fn sent_messages(&self) -> Vec<(String, String)> {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait::async_trait]
impl INotificationChannel for InMemoryNotificationChannel {
    async fn send(&self, chat_id: &str, text: &str) {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((chat_id.to_string(), text.to_string()));
    }

    async fn poll_inbound(&self) -> Vec<InboundMessage> {
        self.inbound
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .drain(..)
            .collect()
    }
}
