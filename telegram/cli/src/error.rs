//! Error types for the telegram CLI.

use telegram_lib::{ConfigError, TelegramError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("bot token not set: pass --token or set TELEGRAM_BOT_TOKEN")]
    MissingToken,

    #[error("invalid timeout '{0}': expected seconds, e.g. 5 or 2.5")]
    InvalidTimeout(String),

    #[error("invalid API URL '{0}'")]
    InvalidApiUrl(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Telegram(#[from] TelegramError),

    #[error("unexpected result shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to open log file: {0}")]
    LogFile(#[from] std::io::Error),
}
