//! Remote methods supported by the client.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Bot API methods exposed by [`BotClient`](crate::BotClient).
///
/// The string form is the method name as it appears in the request path
/// (`https://api.telegram.org/bot<TOKEN>/<method>`).
///
/// ## Examples
///
/// ```rust
/// use telegram_lib::BotMethod;
///
/// assert_eq!(BotMethod::SendMessage.as_str(), "sendMessage");
///
/// let parsed: BotMethod = "setWebhook".parse().unwrap();
/// assert_eq!(parsed, BotMethod::SetWebhook);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum BotMethod {
    /// Send a text message to a chat.
    SendMessage,
    /// Fetch pending updates.
    GetUpdates,
    /// Delete a message from a chat.
    DeleteMessage,
    /// Register the webhook URL for the bot.
    SetWebhook,
}

impl BotMethod {
    /// Returns the method name used in the request path.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
