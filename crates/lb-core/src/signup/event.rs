use crate::company::{Cnpj, CompanyRecord};
use crate::ports::{LookupError, SubmitError};
use crate::signup::Classification;

/// Events driving the signup flow.
#[derive(Debug, Clone, PartialEq)]
pub enum SignupEvent {
    // User input
    SubmitName { name: String },
    RequestLookup { raw_cnpj: String },
    ConfirmCompany,
    Back,
    SubmitRegistration { classification: Classification },

    // Collaborator results (from the orchestrator)
    LookupSucceeded { company: CompanyRecord },
    LookupFailed { cnpj: Cnpj, error: LookupError },
    SubmitSucceeded,
    SubmitFailed { error: SubmitError },
}
