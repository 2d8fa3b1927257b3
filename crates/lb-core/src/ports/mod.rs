//! Port interfaces for the application layer
//!
//! Ports define the contract between the signup logic and infrastructure
//! implementations. The flow logic stays testable without a network: the
//! orchestrator only ever talks to these traits.

pub mod chatbot;
pub mod company_registry;
pub mod registration;
pub mod signup_events;

pub use chatbot::{ChatError, ChatbotPort};
pub use company_registry::{CompanyRegistryPort, LookupError};
pub use registration::{RegistrationPort, SubmitError};
pub use signup_events::SignupEventPort;
