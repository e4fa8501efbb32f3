use serde::{Deserialize, Serialize};

/// `event_type` sent with every `repository_dispatch` call.
pub const DISPATCH_EVENT_TYPE: &str = "telegram-devops";

/// A deployable target: a name, a GitHub `owner/repo`, and lowercase keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub repo: String,
    pub keywords: Vec<String>,
}

/// The parts of a Telegram message the relay acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub chat_id: i64,
    pub sender_id: String,
    pub sender_name: Option<String>,
    /// Message text with surrounding whitespace removed.
    pub text: String,
}

impl IncomingMessage {
    #[must_use]
    pub fn triggered_by(&self) -> &str {
        self.sender_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or("User")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DispatchPayload {
    pub event_type: String,
    pub client_payload: ClientPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientPayload {
    pub instruction: String,
    pub chat_id: String,
    pub project: String,
    pub triggered_by: String,
}

impl DispatchPayload {
    #[must_use]
    pub fn new(message: &IncomingMessage, project: &Project) -> Self {
        Self {
            event_type: DISPATCH_EVENT_TYPE.to_string(),
            client_payload: ClientPayload {
                instruction: message.text.clone(),
                chat_id: message.chat_id.to_string(),
                project: project.name.clone(),
                triggered_by: message.triggered_by().to_string(),
            },
        }
    }
}

/// Status and body returned by the dispatch endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResponse {
    pub status: u16,
    pub body: String,
}

impl DispatchResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
