//! Chat domain module.
//!
//! Message log of the assistant widget. Independent of the signup session.

mod log;
mod message;

pub use log::ChatLog;
pub use message::{ChatMessage, ChatRole};
