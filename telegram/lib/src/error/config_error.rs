use thiserror::Error;

use crate::token::TokenError;

/// Errors raised while building a [`BotClient`](crate::BotClient).
///
/// No request has been made when one of these is returned.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The bot token failed validation.
    #[error("invalid bot token: {0}")]
    InvalidToken(#[from] TokenError),

    /// The base URL cannot carry the `bot<TOKEN>/` path.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The default HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
