//! Infrastructure adapters for the Lybano signup flow.
//!
//! HTTP clients implementing the `lb-core` ports: company registry lookup
//! (public registry and internal backend shapes), registration submission
//! and the FAQ chatbot.

pub mod backend;
pub mod chatbot;
pub mod config;
pub mod registry;

pub use backend::RegistrationClient;
pub use chatbot::HttpChatbotClient;
pub use config::EndpointConfig;
pub use registry::{BackendRegistryClient, PublicRegistryClient};
