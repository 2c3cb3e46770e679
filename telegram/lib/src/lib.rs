//! Minimal client for the Telegram Bot API.
//!
//! The crate translates four operations into `POST` requests against
//! `https://api.telegram.org/bot<TOKEN>/<method>` and maps the API's
//! `{ok, result, description}` envelope to a value or a typed error.
//!
//! ## Core Types
//!
//! - [`BotClient`] - The client; one async method per operation
//! - [`BotClientBuilder`] - Timeout, host, transport and logging options
//! - [`Params`] - Parameter mapping sent as the JSON body
//! - [`BotMethod`] - The supported remote methods
//!
//! ## Errors
//!
//! - [`TelegramError`] - Transport, protocol or API failure of a call
//! - [`ConfigError`] - Failure while building a client
//!
//! ## Transport
//!
//! - [`Transport`] - The HTTP seam; inject your own for tests
//! - [`ReqwestTransport`] - Default implementation
//!
//! ## Logging
//!
//! Each call emits `tracing` events: "outbound request" and
//! "inbound response" at INFO, "HTTP request failed" at ERROR. With the
//! default [`PayloadLogging::Full`] they include the parameters and the raw
//! body, which may contain user message text. The token is never logged.

mod client;
pub mod error;
mod method;
pub mod response;
mod token;
pub mod transport;
pub mod types;

pub use client::{BotClient, BotClientBuilder, DEFAULT_API_URL, Params, PayloadLogging};
pub use error::{ConfigError, TelegramError, TransportError};
pub use method::BotMethod;
pub use token::{BotToken, TokenError};
pub use transport::{ReqwestTransport, Transport};
