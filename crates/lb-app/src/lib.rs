//! Lybano signup orchestration layer.
//!
//! This crate contains business logic use cases and runtime orchestration.

pub mod usecases;

pub use usecases::{ChatConversation, SignupContext, SignupOrchestrator};
