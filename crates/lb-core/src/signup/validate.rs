//! Field validation for the signup flow.
//!
//! Validation is synchronous and field-scoped: a failure blocks the
//! corresponding transition and nothing else.

use crate::company::Cnpj;
use crate::signup::{Classification, SignupFlowConfig, ValidationError};

pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 50;

/// Validates the public display name entered on the identity step.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let chars = name.chars().count();
    if chars < NAME_MIN_CHARS {
        return Err(ValidationError::NameTooShort {
            min: NAME_MIN_CHARS,
        });
    }
    if chars > NAME_MAX_CHARS {
        return Err(ValidationError::NameTooLong {
            max: NAME_MAX_CHARS,
        });
    }
    Ok(())
}

/// Filters free-typed input down to digits and validates the result.
pub fn validate_cnpj(raw: &str) -> Result<Cnpj, ValidationError> {
    Cnpj::parse(raw).map_err(|_| ValidationError::InvalidCnpj)
}

/// Validates the classification answers against the active flow variant.
pub fn validate_classification(
    config: &SignupFlowConfig,
    classification: &Classification,
) -> Result<(), ValidationError> {
    if !config.classification_step {
        return Ok(());
    }
    if config.require_service_kind && classification.service_kind.is_none() {
        return Err(ValidationError::MissingServiceKind);
    }
    if classification.industry.trim().is_empty() {
        return Err(ValidationError::MissingIndustry);
    }
    Ok(())
}
