use async_trait::async_trait;
use thiserror::Error;

/// Failure of a chatbot call. Never shown to the user: the widget drops the
/// pending entry and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("chatbot request timed out")]
    Timeout,

    #[error("chatbot request failed: {0}")]
    Transport(String),

    #[error("chatbot returned an unexpected payload: {0}")]
    InvalidPayload(String),
}

/// Remote chatbot answering FAQ questions.
#[async_trait]
pub trait ChatbotPort: Send + Sync {
    /// Sends one question and returns the assistant's answer as plain text.
    async fn ask(&self, message: &str) -> Result<String, ChatError>;
}
