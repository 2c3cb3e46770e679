//! Public Bot API operations.
//!
//! Each method only shapes parameters; the executor does the rest and its
//! error is returned unchanged.

use serde_json::{Value, json};

use crate::error::TelegramError;
use crate::method::BotMethod;

use super::{BotClient, Params};

/// Required fields first, then `options`; a key in `options` wins.
fn merge(required: Params, options: Params) -> Params {
    let mut params = required;
    params.extend(options);
    params
}

impl BotClient {
    /// Sends a text message.
    ///
    /// Sends `{chat_id, text}` merged with `options` (e.g. `parse_mode`,
    /// `reply_markup`).
    ///
    /// ## Returns
    ///
    /// The raw `result`: the sent message object, including `message_id`.
    ///
    /// ## Errors
    ///
    /// See [`TelegramError`].
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        options: Params,
    ) -> Result<Value, TelegramError> {
        let mut required = Params::new();
        required.insert("chat_id".into(), json!(chat_id));
        required.insert("text".into(), json!(text));

        self.request(BotMethod::SendMessage, merge(required, options))
            .await
    }

    /// Fetches pending updates. `options` (`offset`, `limit`, `timeout`,
    /// `allowed_updates`) are sent unchanged.
    ///
    /// ## Returns
    ///
    /// The raw `result`: an array of update objects.
    pub async fn get_updates(&self, options: Params) -> Result<Value, TelegramError> {
        self.request(BotMethod::GetUpdates, options).await
    }

    /// Deletes a message.
    ///
    /// ## Returns
    ///
    /// `true` only if the API's `result` is exactly `true`. Failures are
    /// errors, never `false`.
    pub async fn delete_message(&self, chat_id: i64, message_id: i64) -> Result<bool, TelegramError> {
        let mut params = Params::new();
        params.insert("chat_id".into(), json!(chat_id));
        params.insert("message_id".into(), json!(message_id));

        let result = self.request(BotMethod::DeleteMessage, params).await?;
        Ok(result == Value::Bool(true))
    }

    /// Registers `url` as the bot's webhook, merged with `options`
    /// (e.g. `secret_token`, `allowed_updates`).
    ///
    /// ## Returns
    ///
    /// `true` only if the API's `result` is exactly `true`.
    pub async fn set_webhook(&self, url: &str, options: Params) -> Result<bool, TelegramError> {
        let mut required = Params::new();
        required.insert("url".into(), json!(url));

        let result = self
            .request(BotMethod::SetWebhook, merge(required, options))
            .await?;
        Ok(result == Value::Bool(true))
    }
}
