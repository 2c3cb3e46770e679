use thiserror::Error;

/// Failures below the API envelope: the request never produced a body to
/// decode.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The configured timeout elapsed.
    #[error("request timed out")]
    Timeout,

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The server answered with a non-success status.
    ///
    /// The body is kept for diagnostics; it is not decoded.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Any other failure reported by the HTTP client.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            return Self::Timeout;
        }
        if error.is_connect() {
            return Self::Connection(error.to_string());
        }
        Self::Request(error)
    }
}
