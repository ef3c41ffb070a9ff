use std::str::FromStr;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    pub bot: BotConfig,
    /// Seconds between two polls for inbound chat commands
    pub poll_interval_secs: u64,
    /// Seconds between two sweeps for due reminders
    pub sweep_interval_secs: u64,
    /// Hour of the day (UTC) at which notified reminders are cleaned up
    pub cleanup_hour_utc: u32,
}

/// Settings of the chat bot used both for inbound commands and
/// outbound notifications
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// When disabled no background tasks run and no network calls are made
    pub enabled: bool,
    pub token: Option<String>,
    /// Chat that receives due notices and confirmations of batches
    /// created through the HTTP api
    pub default_chat_id: Option<String>,
    pub api_base_url: String,
    /// How long the bot api may hold a `getUpdates` request open
    pub poll_timeout_secs: u64,
    /// Upper bound for every request made to the bot api
    pub request_timeout_secs: u64,
}

fn env_or_default<T: FromStr + ToString>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(value) => match value.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    key,
                    value,
                    default.to_string()
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl Config {
    pub fn new() -> Self {
        let bot = BotConfig::new();
        let mut cleanup_hour_utc = env_or_default::<u32>("REMINDER_CLEANUP_HOUR_UTC", 3);
        if cleanup_hour_utc > 23 {
            warn!(
                "The given REMINDER_CLEANUP_HOUR_UTC: {} is not an hour of the day, falling back to 3.",
                cleanup_hour_utc
            );
            cleanup_hour_utc = 3;
        }
        Self {
            port: env_or_default("PORT", 5000),
            bot,
            poll_interval_secs: env_or_default::<u64>("REMINDER_POLL_INTERVAL_SECS", 5).max(1),
            sweep_interval_secs: env_or_default::<u64>("REMINDER_SWEEP_INTERVAL_SECS", 30 * 60).max(1),
            cleanup_hour_utc,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl BotConfig {
    pub fn new() -> Self {
        let enabled = env_or_default("TELEGRAM_BOT_ENABLED", false);
        let token = optional_env("TELEGRAM_BOT_TOKEN");
        let default_chat_id = optional_env("TELEGRAM_CHAT_ID");
        if !enabled {
            info!("Telegram bot is disabled. Set TELEGRAM_BOT_ENABLED=true to enable.");
        } else if token.is_none() {
            warn!("Telegram bot is enabled but TELEGRAM_BOT_TOKEN is not configured.");
        } else if default_chat_id.is_none() {
            warn!("TELEGRAM_CHAT_ID is not configured. Due notices will not be delivered.");
        }

        Self {
            enabled,
            token,
            default_chat_id,
            api_base_url: optional_env("TELEGRAM_API_URL")
                .unwrap_or_else(|| "https://api.telegram.org".into()),
            poll_timeout_secs: env_or_default("TELEGRAM_POLL_TIMEOUT_SECS", 1),
            request_timeout_secs: env_or_default::<u64>("TELEGRAM_REQUEST_TIMEOUT_SECS", 10).max(1),
        }
    }

    /// The bot is only usable when enabled and a token was given
    pub fn is_active(&self) -> bool {
        self.enabled && self.token.is_some()
    }

    /// A bot that never talks to the network
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            token: None,
            default_chat_id: None,
            api_base_url: "https://api.telegram.org".into(),
            poll_timeout_secs: 1,
            request_timeout_secs: 10,
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self::new()
    }
}
