//! Chat widget use case.
//!
//! A self-contained question/answer surface opened from within the wizard.
//! Independent of the signup session; only the display name is read from it,
//! for the greeting.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info_span, warn, Instrument};

use lb_core::chat::{ChatLog, ChatMessage};
use lb_core::ports::ChatbotPort;

/// FAQ shortcuts offered by the widget.
pub const SUGGESTED_QUESTIONS: [&str; 2] = ["O que é um CNPJ?", "Por que colocar o CNPJ?"];

/// One open chat widget: its message log plus the chatbot collaborator.
pub struct ChatConversation {
    chatbot: Arc<dyn ChatbotPort>,
    log: Mutex<ChatLog>,
}

impl ChatConversation {
    /// Opens a conversation greeting the named user.
    pub fn new(chatbot: Arc<dyn ChatbotPort>, display_name: &str) -> Self {
        let mut log = ChatLog::new();
        let display_name = display_name.trim();
        let greeting = if display_name.is_empty() {
            "Olá! Como posso ajudar?".to_string()
        } else {
            format!("Olá, {}! Como posso ajudar?", display_name)
        };
        log.push_assistant(greeting);
        Self {
            chatbot,
            log: Mutex::new(log),
        }
    }

    /// Sends one question and returns the log after resolution.
    ///
    /// Blank input is ignored. On chatbot failure the pending placeholder is
    /// removed and the question is dropped silently: no error state is kept.
    pub async fn send(&self, question: &str) -> Vec<ChatMessage> {
        let span = info_span!("usecase.chat_conversation.send");
        async {
            let question = question.trim();
            if question.is_empty() {
                return self.messages().await;
            }

            {
                let mut log = self.log.lock().await;
                log.push_exchange(question);
            }

            match self.chatbot.ask(question).await {
                Ok(answer) => {
                    let mut log = self.log.lock().await;
                    log.resolve_pending(answer);
                }
                Err(error) => {
                    warn!(error = %error, "chatbot request failed, dropping message");
                    let mut log = self.log.lock().await;
                    log.discard_pending();
                }
            }

            self.messages().await
        }
        .instrument(span)
        .await
    }

    /// Snapshot of the current log.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.log.lock().await.messages().to_vec()
    }
}
