use thiserror::Error;

use super::TransportError;

/// Description used when a failed envelope carries none.
pub const UNKNOWN_API_ERROR: &str = "unknown API error";

/// Error returned by every [`BotClient`](crate::BotClient) operation.
///
/// All three kinds are terminal: the client never retries.
///
/// ## Examples
///
/// ```rust,ignore
/// match client.send_message(chat_id, "hi", Params::new()).await {
///     Ok(message) => println!("sent {}", message["message_id"]),
///     Err(TelegramError::Api { description, .. }) => eprintln!("rejected: {description}"),
///     Err(TelegramError::Transport(e)) => eprintln!("network: {e}"),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum TelegramError {
    /// The request failed before a response body was available.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] TransportError),

    /// The response body is not valid JSON, or reported success without a
    /// `result` field. `source` holds the parser error when there is one.
    #[error("malformed response body: {reason}")]
    Protocol {
        reason: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The API answered with `ok` false or missing.
    #[error("API error: {description}")]
    Api {
        description: String,
        error_code: Option<i64>,
    },
}

impl From<serde_json::Error> for TelegramError {
    fn from(err: serde_json::Error) -> Self {
        Self::Protocol {
            reason: err.to_string(),
            source: Some(err),
        }
    }
}

impl TelegramError {
    pub(crate) fn missing_result() -> Self {
        Self::Protocol {
            reason: "missing `result` field".to_string(),
            source: None,
        }
    }

    /// Returns `true` for [`TelegramError::Protocol`].
    pub fn is_protocol(&self) -> bool {
        matches!(self, Self::Protocol { .. })
    }

    /// Returns the API description for [`TelegramError::Api`].
    pub fn api_description(&self) -> Option<&str> {
        match self {
            Self::Api { description, .. } => Some(description),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_display_and_accessor() {
        let err = TelegramError::Api {
            description: "bad token".to_string(),
            error_code: Some(401),
        };
        assert_eq!(err.to_string(), "API error: bad token");
        assert_eq!(err.api_description(), Some("bad token"));
        assert!(!err.is_protocol());
    }

    #[test]
    fn test_protocol_carries_parser_diagnostic() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let diagnostic = parse_err.to_string();
        let err = TelegramError::from(parse_err);

        assert!(err.is_protocol());
        assert!(err.to_string().contains(&diagnostic));
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.api_description(), None);
    }

    #[test]
    fn test_missing_result_is_protocol_without_source() {
        let err = TelegramError::missing_result();

        assert!(err.is_protocol());
        assert_eq!(
            err.to_string(),
            "malformed response body: missing `result` field"
        );
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_transport_from() {
        let err: TelegramError = TransportError::Timeout.into();
        assert!(matches!(err, TelegramError::Transport(TransportError::Timeout)));
        assert_eq!(err.to_string(), "HTTP request failed: request timed out");
    }
}
