//! Layered error types for the Telegram client.
//!
//! - [`TelegramError`] - Returned by every client operation
//! - [`TransportError`] - Network, timeout and HTTP status failures
//! - [`ConfigError`] - Failures while building a client

mod config_error;
mod telegram_error;
mod transport_error;

pub use config_error::ConfigError;
pub use telegram_error::{TelegramError, UNKNOWN_API_ERROR};
pub use transport_error::TransportError;
