use serde::{Deserialize, Serialize};

use crate::company::{Cnpj, CompanyRecord};
use crate::ids::SessionId;
use crate::ports::{LookupError, SubmitError};
use crate::signup::ValidationError;

/// Wizard step. Strictly ordered; progress is monotonic forward except for
/// an explicit `Back`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SignupStep {
    Identity,
    TaxIdEntry,
    Review,
    Classification,
    Done,
}

/// Collaborator-call status, orthogonal to the step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignupStatus {
    Idle,
    LookupInFlight,
    LookupFailed { error: LookupError },
    SubmitInFlight,
    SubmitFailed { error: SubmitError },
    Submitted,
}

/// Whether the company mainly provides services or products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    Services,
    Products,
}

/// Business-classification answers collected after the review screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub service_kind: Option<ServiceKind>,
    pub industry: String,
}

/// One registration attempt.
///
/// Created empty when the wizard mounts; the presentation layer discards it
/// after the post-success redirect, or on navigation away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupSession {
    pub session_id: SessionId,
    pub step: SignupStep,
    pub name: String,
    pub cnpj: Option<Cnpj>,
    /// Present only after a successful lookup; cleared when the user backs
    /// past the tax-id step.
    pub company: Option<CompanyRecord>,
    /// True only after the user explicitly accepted the looked-up data.
    pub confirmed: bool,
    pub classification: Classification,
    pub status: SignupStatus,
    /// Field-scoped failure of the most recently rejected input, if any.
    pub field_error: Option<ValidationError>,
}

impl SignupSession {
    pub fn new() -> Self {
        Self {
            session_id: SessionId::new(),
            step: SignupStep::Identity,
            name: String::new(),
            cnpj: None,
            company: None,
            confirmed: false,
            classification: Classification::default(),
            status: SignupStatus::Idle,
            field_error: None,
        }
    }

    /// Field edits are refused while a collaborator call is outstanding.
    pub fn can_edit(&self) -> bool {
        !matches!(
            self.status,
            SignupStatus::LookupInFlight | SignupStatus::SubmitInFlight
        )
    }
}

impl Default for SignupSession {
    fn default() -> Self {
        Self::new()
    }
}
