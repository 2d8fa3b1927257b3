use serde::{Deserialize, Serialize};

use crate::chat::{ChatMessage, ChatRole};

/// Ordered message log of one chat widget instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Appends a standalone assistant entry (greeting text).
    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(text));
    }

    /// Appends the user's question together with a pending placeholder.
    pub fn push_exchange(&mut self, question: impl Into<String>) {
        self.messages.push(ChatMessage::user(question));
        self.messages.push(ChatMessage::pending());
    }

    /// Replaces the most recent pending placeholder with the answer.
    ///
    /// A resolution arriving with no placeholder left (the log was cleared
    /// in between) is dropped.
    pub fn resolve_pending(&mut self, answer: impl Into<String>) {
        if let Some(slot) = self
            .messages
            .iter_mut()
            .rev()
            .find(|message| message.role == ChatRole::Pending)
        {
            *slot = ChatMessage::assistant(answer);
        }
    }

    /// Removes pending placeholders. Used when the chatbot call fails: the
    /// question stays in the log, the answer slot disappears.
    pub fn discard_pending(&mut self) {
        self.messages
            .retain(|message| message.role != ChatRole::Pending);
    }
}
