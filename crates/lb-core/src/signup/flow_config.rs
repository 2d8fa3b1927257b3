use serde::{Deserialize, Serialize};

/// Feature flags selecting one of the shipped wizard variants.
///
/// Every variant starts with the identity and tax-id steps; the flags control
/// what happens between a successful lookup and the final submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupFlowConfig {
    /// When false, a successful lookup skips the explicit confirmation and
    /// the looked-up data is taken as accepted.
    pub require_confirmation: bool,

    /// When false, no classification answers are collected and submission
    /// happens straight from the review screen.
    pub classification_step: bool,

    /// When false, the services/products answer is optional.
    pub require_service_kind: bool,
}

impl Default for SignupFlowConfig {
    fn default() -> Self {
        Self {
            require_confirmation: true,
            classification_step: true,
            require_service_kind: true,
        }
    }
}
