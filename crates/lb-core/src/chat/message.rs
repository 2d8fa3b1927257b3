use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder text rendered while an answer is outstanding.
pub(crate) const PENDING_TEXT: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
    /// Placeholder entry while the chatbot call is outstanding.
    Pending,
}

/// One entry in a chat log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub role: ChatRole,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            role: ChatRole::User,
            sent_at: Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            role: ChatRole::Assistant,
            sent_at: Utc::now(),
        }
    }

    pub fn pending() -> Self {
        Self {
            text: PENDING_TEXT.to_string(),
            role: ChatRole::Pending,
            sent_at: Utc::now(),
        }
    }
}
