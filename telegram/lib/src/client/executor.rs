//! Request execution with tracing instrumentation.
//!
//! Every operation of [`BotClient`] funnels through [`BotClient::request`],
//! the only place where responses are decoded and failures classified.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, instrument, Span};
use url::Url;

use crate::error::{ConfigError, TelegramError};
use crate::method::BotMethod;
use crate::response::ApiEnvelope;
use crate::token::BotToken;
use crate::transport::Transport;

use super::{BotClientBuilder, Params, PayloadLogging};

/// Async client for the Telegram Bot API.
///
/// Immutable after construction; share it by reference. Each operation
/// performs exactly one request and never retries.
///
/// ## Examples
///
/// ```rust,no_run
/// use telegram_lib::{BotClient, Params};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = BotClient::new("123456:ABC-DEF")?;
/// let message = client.send_message(5302145640, "Hello!", Params::new()).await?;
/// println!("sent message {}", message["message_id"]);
/// # Ok(())
/// # }
/// ```
pub struct BotClient {
    base_url: Url,
    token: BotToken,
    /// `<base_url>bot<token>/`; contains the secret.
    endpoint: String,
    transport: Arc<dyn Transport>,
    payload_logging: PayloadLogging,
}

impl BotClient {
    /// Creates a new builder for the given token.
    pub fn builder(token: impl Into<String>) -> BotClientBuilder {
        BotClientBuilder::new(token.into())
    }

    /// Creates a client with the default host, timeout and transport.
    ///
    /// ## Errors
    ///
    /// Returns an error if the token is invalid or the HTTP client cannot be
    /// constructed.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder(token).build()
    }

    pub(super) fn from_parts(
        base_url: Url,
        token: BotToken,
        endpoint: String,
        transport: Arc<dyn Transport>,
        payload_logging: PayloadLogging,
    ) -> Self {
        Self {
            base_url,
            token,
            endpoint,
            transport,
            payload_logging,
        }
    }

    /// Returns the API host this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the configured payload logging policy.
    pub fn payload_logging(&self) -> PayloadLogging {
        self.payload_logging
    }

    fn method_url(&self, method: BotMethod) -> String {
        format!("{}{}", self.endpoint, method.as_str())
    }

    /// Calls `method` with `params` and returns the envelope's `result`.
    ///
    /// ## Errors
    ///
    /// - [`TelegramError::Transport`] if the request fails; nothing is parsed
    /// - [`TelegramError::Protocol`] if the body is not JSON, or `ok` is true
    ///   without `result`
    /// - [`TelegramError::Api`] if `ok` is false or missing
    #[instrument(
        name = "bot_api_request",
        skip_all,
        fields(
            bot.method = %method,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub(super) async fn request(
        &self,
        method: BotMethod,
        params: Params,
    ) -> Result<Value, TelegramError> {
        let url = self.method_url(method);
        let body = Value::Object(params);

        // No redaction: params may carry end-user message text.
        match self.payload_logging {
            PayloadLogging::Full => info!(method = %method, params = %body, "outbound request"),
            PayloadLogging::MethodOnly => info!(method = %method, "outbound request"),
        }

        let raw = match self.transport.post_json(&url, &body).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(method = %method, error = %e, "HTTP request failed");
                Span::current().record("otel.status_code", "ERROR");
                return Err(e.into());
            }
        };

        match self.payload_logging {
            PayloadLogging::Full => info!(method = %method, response = %raw, "inbound response"),
            PayloadLogging::MethodOnly => {
                info!(method = %method, bytes = raw.len(), "inbound response")
            }
        }

        let outcome = ApiEnvelope::parse(&raw).and_then(ApiEnvelope::into_result);

        let otel_status = if outcome.is_ok() { "OK" } else { "ERROR" };
        Span::current().record("otel.status_code", otel_status);

        outcome
    }
}

impl fmt::Debug for BotClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token)
            .field("transport", &self.transport)
            .field("payload_logging", &self.payload_logging)
            .finish()
    }
}
