//! Typed views of common `result` shapes.
//!
//! The client returns raw JSON; callers that want structure can decode it
//! with [`serde_json::from_value`]. Only the fields this crate's consumers
//! read are modelled; unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// An incoming update from `getUpdates`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
    pub edited_message: Option<Message>,
    pub channel_post: Option<Message>,
}

impl Update {
    /// The message carried by this update, whichever kind it is.
    pub fn any_message(&self) -> Option<&Message> {
        self.message
            .as_ref()
            .or(self.edited_message.as_ref())
            .or(self.channel_post.as_ref())
    }
}

/// A message, as returned by `sendMessage` or embedded in an [`Update`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<User>,
    pub chat: Chat,
    pub date: i64,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub chat_type: String,
    pub title: Option<String>,
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_sent_message() {
        let value = json!({
            "message_id": 42,
            "from": {"id": 1, "is_bot": true, "first_name": "Bot", "username": "demo_bot"},
            "chat": {"id": 5302145640_i64, "type": "private", "username": "alice"},
            "date": 1700000000,
            "text": "Hello!"
        });

        let message: Message = serde_json::from_value(value).unwrap();
        assert_eq!(message.message_id, 42);
        assert_eq!(message.chat.chat_type, "private");
        assert_eq!(message.text.as_deref(), Some("Hello!"));
    }

    #[test]
    fn test_update_any_message_prefers_message() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 9,
            "message": {
                "message_id": 2,
                "chat": {"id": 1, "type": "group", "title": "Team"},
                "date": 0,
                "text": "original"
            },
            "edited_message": {
                "message_id": 3,
                "chat": {"id": 1, "type": "group", "title": "Team"},
                "date": 0,
                "text": "edited"
            }
        }))
        .unwrap();

        let message = update.any_message().unwrap();
        assert_eq!(message.message_id, 2);
        assert_eq!(message.text.as_deref(), Some("original"));
    }

    #[test]
    fn test_update_any_message_falls_back_to_edited() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 9,
            "edited_message": {
                "message_id": 3,
                "chat": {"id": 1, "type": "group", "title": "Team"},
                "date": 0,
                "text": "edited"
            }
        }))
        .unwrap();

        let message = update.any_message().unwrap();
        assert_eq!(message.message_id, 3);
        assert_eq!(message.chat.title.as_deref(), Some("Team"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 1,
            "callback_query": {"id": "abc"}
        }))
        .unwrap();
        assert!(update.any_message().is_none());
    }
}
