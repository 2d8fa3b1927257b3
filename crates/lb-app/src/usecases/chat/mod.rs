mod conversation;

pub use conversation::{ChatConversation, SUGGESTED_QUESTIONS};
