mod config;
mod repos;
mod services;
mod system;

pub use config::{BotConfig, Config};
pub use repos::{DeleteResult, IReminderRepo, Repos};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct LabContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifications: Arc<dyn INotificationChannel>,
}

struct ContextParams {
    pub postgres_connection_string: Option<String>,
}

impl LabContext {
    async fn create(params: ContextParams) -> Self {
        let repos = match params.postgres_connection_string {
            Some(connection_string) => match Repos::create_postgres(&connection_string).await {
                Ok(repos) => repos,
                Err(e) => {
                    error!(
                        "Unable to use the postgres store, falling back to in memory storage. Error message: {:?}",
                        e
                    );
                    Repos::create_inmemory()
                }
            },
            None => {
                warn!("DATABASE_URL is not set, reminders are kept in memory only.");
                Repos::create_inmemory()
            }
        };
        let config = Config::new();
        let notifications = create_notification_channel(&config.bot);

        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            notifications,
        }
    }

    /// Context without any external dependencies. Storage lives in memory
    /// and the chat bot is disabled.
    pub fn create_inmemory() -> Self {
        let config = Config {
            bot: BotConfig::disabled(),
            ..Config::new()
        };
        Self {
            repos: Repos::create_inmemory(),
            config,
            sys: Arc::new(RealSys {}),
            notifications: Arc::new(DisabledNotificationChannel {}),
        }
    }
}

fn create_notification_channel(bot: &BotConfig) -> Arc<dyn INotificationChannel> {
    match (&bot.token, bot.is_active()) {
        (Some(token), true) => {
            info!("Telegram bot is enabled.");
            Arc::new(TelegramBotApi::new(
                &bot.api_base_url,
                token.clone(),
                bot.poll_timeout_secs,
                bot.request_timeout_secs,
            ))
        }
        _ => Arc::new(DisabledNotificationChannel {}),
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> LabContext {
    LabContext::create(ContextParams {
        postgres_connection_string: get_psql_connection_string(),
    })
    .await
}

fn get_psql_connection_string() -> Option<String> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING)
        .ok()
        .filter(|value| !value.trim().is_empty())
}
