//! The HTTP seam between the client and the network.
//!
//! [`Transport`] is the one operation the client needs: POST a JSON body,
//! hand back the full response text. [`ReqwestTransport`] is the default
//! implementation; tests and embedders may inject their own.

use std::fmt;
use std::time::Duration;

use serde_json::Value;

use crate::error::{ConfigError, TransportError};

/// Boxed future returned by [`Transport`] methods.
pub type BoxFuture<'a, T> = std::pin::Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Sends one JSON request and returns the raw response body.
///
/// Implementations own connection handling, TLS and timeouts. A call must
/// perform at most one request: the client relies on that for its
/// no-retry guarantee.
pub trait Transport: Send + Sync + fmt::Debug {
    /// POSTs `body` as JSON to `url`.
    ///
    /// ## Returns
    ///
    /// - `Ok(text)` with the complete response body on a 2xx answer
    /// - `Err(_)` on connection failure, timeout or a non-2xx status
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: &'a Value,
    ) -> BoxFuture<'a, Result<String, TransportError>>;
}

/// [`Transport`] backed by `reqwest`.
///
/// Non-2xx statuses are reported as [`TransportError::Status`], so an
/// envelope carried by an error status never reaches the JSON decoder.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport whose requests time out after `timeout`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self { client })
    }

    /// Wraps an existing `reqwest::Client`, keeping its configuration.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

/// Body kept on a non-2xx error. It is informational only, so a failed
/// read is recorded in place of the text rather than replacing the status.
fn error_body<E: fmt::Display>(read: Result<String, E>) -> String {
    read.unwrap_or_else(|e| format!("<failed to read response body: {e}>"))
}

impl Transport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: &'a Value,
    ) -> BoxFuture<'a, Result<String, TransportError>> {
        Box::pin(async move {
            let response = self.client.post(url).json(body).send().await?;

            let status = response.status();
            if !status.is_success() {
                let body = error_body(response.text().await);
                return Err(TransportError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            Ok(response.text().await?)
        })
    }
}
