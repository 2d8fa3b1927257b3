//! # lb-core
//!
//! Core domain models and business logic for the Lybano signup flow.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod chat;
pub mod company;
pub mod ids;
pub mod ports;
pub mod signup;

// Re-export commonly used types at the crate root
pub use company::{Cnpj, CompanyRecord};
pub use ids::SessionId;
pub use signup::{SignupSession, SignupStatus, SignupStep};
