//! Webhook `Update` payloads, reduced to the fields the relay reads.

use serde::Deserialize;
use serde_json::Value;

use crate::core::models::IncomingMessage;
use crate::errors::ShipItError;

/// A webhook update. `message` stays raw until it is known to carry text, so
/// updates of any other shape are ignored instead of rejected.
#[derive(Debug, Default)]
pub struct Update {
    pub message: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub chat: Option<Chat>,
    #[serde(default)]
    pub from: Option<User>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
}

impl Update {
    /// Parse a webhook body. Any valid JSON is accepted; a top-level value
    /// that is not an object simply has no message.
    ///
    /// # Errors
    ///
    /// Returns [`ShipItError::Parse`] if the body is not valid JSON.
    pub fn parse(body: &str) -> Result<Self, ShipItError> {
        let value: Value = serde_json::from_str(body)?;
        Ok(Self {
            message: value.get("message").cloned(),
        })
    }

    /// Extract the text message, if any.
    ///
    /// `Ok(None)` for updates the relay ignores (no message, a message that is
    /// not an object, no text, empty text). A text message missing its chat or
    /// sender is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ShipItError::Parse`] when a text message lacks `chat` or `from`
    /// or they have the wrong shape.
    pub fn into_incoming(self) -> Result<Option<IncomingMessage>, ShipItError> {
        let Some(raw) = self.message.filter(Value::is_object) else {
            return Ok(None);
        };
        let has_text = raw
            .get("text")
            .and_then(Value::as_str)
            .is_some_and(|t| !t.is_empty());
        if !has_text {
            return Ok(None);
        }

        let message: Message = serde_json::from_value(raw)?;
        let text = message.text.unwrap_or_default();

        let chat = message
            .chat
            .ok_or_else(|| ShipItError::Parse("message without chat".to_string()))?;
        let from = message
            .from
            .ok_or_else(|| ShipItError::Parse("message without sender".to_string()))?;

        Ok(Some(IncomingMessage {
            chat_id: chat.id,
            sender_id: from.id.to_string(),
            sender_name: from.first_name,
            text: text.trim().to_string(),
        }))
    }
}
