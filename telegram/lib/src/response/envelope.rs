use serde_json::Value;

use crate::error::{TelegramError, UNKNOWN_API_ERROR};

/// A decoded response envelope.
///
/// Built from any JSON value. A non-object body, a missing `ok` field or an
/// `ok` that is not the boolean `true` all count as a failed call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiEnvelope {
    pub ok: bool,
    /// `None` when the field is absent; `Some(Value::Null)` when it is `null`.
    pub result: Option<Value>,
    pub description: Option<String>,
    pub error_code: Option<i64>,
}

impl ApiEnvelope {
    /// Parses a raw response body.
    ///
    /// ## Errors
    ///
    /// Returns [`TelegramError::Protocol`] if the body is not valid JSON.
    pub fn parse(body: &str) -> Result<Self, TelegramError> {
        let value: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(value))
    }

    /// Reads the envelope fields out of an already-decoded value.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut map) = value else {
            return Self {
                ok: false,
                result: None,
                description: None,
                error_code: None,
            };
        };

        Self {
            ok: matches!(map.get("ok"), Some(Value::Bool(true))),
            result: map.remove("result"),
            description: map
                .remove("description")
                .and_then(|d| d.as_str().map(str::to_owned)),
            error_code: map.get("error_code").and_then(Value::as_i64),
        }
    }

    /// Converts the envelope into the call outcome.
    ///
    /// ## Errors
    ///
    /// - [`TelegramError::Api`] when `ok` is not `true`, with the description
    ///   or [`UNKNOWN_API_ERROR`]
    /// - [`TelegramError::Protocol`] when `ok` is `true` but `result` is
    ///   absent
    pub fn into_result(self) -> Result<Value, TelegramError> {
        if !self.ok {
            return Err(TelegramError::Api {
                description: self
                    .description
                    .unwrap_or_else(|| UNKNOWN_API_ERROR.to_string()),
                error_code: self.error_code,
            });
        }

        self.result.ok_or_else(TelegramError::missing_result)
    }
}
