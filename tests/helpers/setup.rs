use lab_reminders_api::Application;
use lab_reminders_infra::{Config, InMemoryNotificationChannel, LabContext};
use lab_reminders_sdk::LabRemindersSDK;
use std::sync::Arc;

pub const DEFAULT_CHAT: &str = "-1001";

pub struct TestApp {
    pub config: Config,
    /// Everything the server sends to the chat ends up here
    pub channel: Arc<InMemoryNotificationChannel>,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, LabRemindersSDK, String) {
    let channel = Arc::new(InMemoryNotificationChannel::new());
    let mut ctx = LabContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.config.bot.default_chat_id = Some(DEFAULT_CHAT.into());
    ctx.notifications = channel.clone();

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { config, channel };
    let sdk = LabRemindersSDK::new(address.clone());
    (app, sdk, address)
}
