mod inmemory;
mod telegram;

pub use inmemory::{DisabledNotificationChannel, InMemoryNotificationChannel};
pub use telegram::TelegramBotApi;

/// A text message received from the chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub chat_id: String,
    pub text: String,
}

/// Chat boundary used for outbound notifications and inbound commands
#[async_trait::async_trait]
pub trait INotificationChannel: Send + Sync {
    /// Best effort delivery. Failures are logged, never returned.
    async fn send(&self, chat_id: &str, text: &str);
    /// Messages received since the previous poll. Already returned
    /// messages are not returned again during the lifetime of the process.
    async fn poll_inbound(&self) -> Vec<InboundMessage>;
}
