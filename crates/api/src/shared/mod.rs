pub mod usecase;

#[cfg(test)]
pub mod test_context {
    use chrono::{DateTime, Utc};
    use lab_reminders_infra::{InMemoryNotificationChannel, LabContext, StaticTimeSys};
    use std::sync::Arc;

    pub const DEFAULT_CHAT: &str = "-1001";

    /// In memory context frozen at `now`, with a default chat configured and
    /// a channel that records everything sent through it
    pub fn setup(now: DateTime<Utc>) -> (LabContext, Arc<InMemoryNotificationChannel>) {
        let channel = Arc::new(InMemoryNotificationChannel::new());
        let mut ctx = LabContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys(now.timestamp_millis()));
        ctx.notifications = channel.clone();
        ctx.config.bot.default_chat_id = Some(DEFAULT_CHAT.into());

        (ctx, channel)
    }
}
