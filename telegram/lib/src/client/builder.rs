use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;
use crate::token::BotToken;
use crate::transport::{ReqwestTransport, Transport, DEFAULT_TIMEOUT};

use super::BotClient;

/// Public Bot API host.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org/";

/// How much of each call the client writes to the log.
///
/// Parameters and response bodies may contain end-user message text. The
/// default logs them in full.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PayloadLogging {
    /// Log the method, the parameters and the raw response body.
    #[default]
    Full,
    /// Log only the method name.
    MethodOnly,
}

/// Builder for configuring a [`BotClient`].
///
/// Optional parts are filled in by [`build`](Self::build): without an
/// injected transport, a [`ReqwestTransport`] with the configured timeout is
/// created.
pub struct BotClientBuilder {
    token: String,
    base_url: Option<Url>,
    timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
    payload_logging: PayloadLogging,
}

impl BotClientBuilder {
    pub(super) fn new(token: String) -> Self {
        Self {
            token,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            transport: None,
            payload_logging: PayloadLogging::default(),
        }
    }

    /// Sets the request timeout of the default transport.
    ///
    /// Ignored when a transport is injected with [`transport`](Self::transport).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the API host, e.g. for a local Bot API server.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// let client = BotClient::builder(token)
    ///     .base_url(Url::parse("http://localhost:8081")?)
    ///     .build()?;
    /// ```
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Injects the transport used for every request.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Sets how much of each call is logged.
    pub fn payload_logging(mut self, payload_logging: PayloadLogging) -> Self {
        self.payload_logging = payload_logging;
        self
    }

    /// Builds the [`BotClient`]. No request is made.
    ///
    /// ## Errors
    ///
    /// - [`ConfigError::InvalidToken`] if the token is empty or malformed
    /// - [`ConfigError::InvalidBaseUrl`] if the base URL cannot carry a path
    /// - [`ConfigError::HttpClient`] if the default transport cannot be built
    pub fn build(self) -> Result<BotClient, ConfigError> {
        let token = BotToken::new(self.token)?;

        let mut base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_API_URL)
                .map_err(|e| ConfigError::InvalidBaseUrl(e.to_string()))?,
        };
        // Method paths are appended as text, so a query or fragment would
        // swallow them.
        if base_url.cannot_be_a_base()
            || base_url.query().is_some()
            || base_url.fragment().is_some()
        {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        // Joined as text: real tokens contain ':' and would parse as a scheme.
        let endpoint = format!("{base_url}bot{}/", token.expose());
        Url::parse(&endpoint).map_err(|e| ConfigError::InvalidBaseUrl(e.to_string()))?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.timeout)?),
        };

        Ok(BotClient::from_parts(
            base_url,
            token,
            endpoint,
            transport,
            self.payload_logging,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenError;

    #[test]
    fn test_empty_token_fails_fast() {
        let err = BotClient::builder("").build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidToken(TokenError::Empty)));
    }

    #[test]
    fn test_default_base_url() {
        let client = BotClient::new("123:abc").unwrap();
        assert_eq!(client.base_url().as_str(), DEFAULT_API_URL);
        assert_eq!(client.payload_logging(), PayloadLogging::Full);
    }

    #[test]
    fn test_base_url_without_trailing_slash() {
        let client = BotClient::builder("123:abc")
            .base_url(Url::parse("http://localhost:8081/custom").unwrap())
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8081/custom/");
    }

    #[test]
    fn test_cannot_be_a_base_url_is_rejected() {
        let err = BotClient::builder("123:abc")
            .base_url(Url::parse("mailto:bot@example.com").unwrap())
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_base_url_with_query_or_fragment_is_rejected() {
        for raw in ["http://localhost:8081/?x=1", "http://localhost:8081/#frag"] {
            let err = BotClient::builder("123:abc")
                .base_url(Url::parse(raw).unwrap())
                .build()
                .unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidBaseUrl(ref url) if url == raw),
                "{raw}: {err:?}"
            );
        }
    }

    #[test]
    fn test_custom_timeout_and_logging() {
        let client = BotClient::builder("123:abc")
            .timeout(Duration::from_secs(60))
            .payload_logging(PayloadLogging::MethodOnly)
            .build()
            .unwrap();
        assert_eq!(client.payload_logging(), PayloadLogging::MethodOnly);
    }
}
