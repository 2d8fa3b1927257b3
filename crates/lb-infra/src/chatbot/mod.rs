//! Chatbot client.

mod http;

pub use http::HttpChatbotClient;
