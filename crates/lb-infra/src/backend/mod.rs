//! Product backend clients.

mod registration_api;

pub use registration_api::RegistrationClient;
