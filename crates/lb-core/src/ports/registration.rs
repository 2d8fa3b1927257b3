use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::signup::Registration;

/// Failure of a registration submit. `Display` carries the user-facing
/// message shown on the classification screen.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SubmitError {
    #[error("Tempo esgotado ao cadastrar o CNPJ")]
    Timeout,

    #[error("Cadastro recusado pelo servidor (status {status})")]
    Rejected { status: u16 },

    #[error("Erro ao cadastrar CNPJ: {0}")]
    Transport(String),
}

/// Backend persisting finished registrations.
///
/// The record is keyed by its CNPJ and the acknowledgement body is ignored.
/// No idempotency key is attached: a repeated user-triggered submit may
/// create a duplicate backend record.
#[async_trait]
pub trait RegistrationPort: Send + Sync {
    async fn submit(&self, registration: &Registration) -> Result<(), SubmitError>;
}
