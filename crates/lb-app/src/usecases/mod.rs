//! Business logic use cases

pub mod chat;
pub mod signup;

pub use chat::{ChatConversation, SUGGESTED_QUESTIONS};
pub use signup::{SignupContext, SignupOrchestrator};
