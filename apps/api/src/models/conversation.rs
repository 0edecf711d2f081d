use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

/// One chat bubble as rendered by the widget. History lives on the client;
/// the server only mints assistant replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    /// Render a "contact me" button under this message.
    #[serde(default)]
    pub include_contact_button: bool,
}

impl ConversationMessage {
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender: Sender::Assistant,
            timestamp: Utc::now(),
            include_contact_button: false,
        }
    }

    pub fn with_contact_button(mut self) -> Self {
        self.include_contact_button = true;
        self
    }
}
