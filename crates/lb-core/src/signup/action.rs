use crate::company::Cnpj;
use crate::signup::Registration;

/// Side effects requested by a transition. Executed by the orchestrator,
/// never by the state machine itself.
#[derive(Debug, Clone, PartialEq)]
pub enum SignupAction {
    /// Look the company up in the external registry.
    LookupCompany { cnpj: Cnpj },

    /// Persist the finished registration with the backend.
    SubmitRegistration { registration: Registration },

    /// Arrange the post-success redirect after the fixed display delay.
    ScheduleRedirect,
}
