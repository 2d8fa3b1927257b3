use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::company::{Cnpj, CompanyRecord};

/// Failure of a registry lookup. `Display` carries the user-facing message
/// rendered next to the CNPJ field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LookupError {
    #[error("CNPJ não encontrado")]
    NotFound,

    #[error("Tempo esgotado ao consultar o CNPJ")]
    Timeout,

    #[error("Erro ao buscar dados do CNPJ: {0}")]
    Transport(String),

    #[error("Resposta inesperada do serviço de CNPJ: {0}")]
    InvalidPayload(String),
}

/// External company registry.
///
/// One lookup per user-initiated request; a retry is always a user
/// re-trigger, never the client's. Implementations must fill the returned
/// record's `cnpj` with the identifier the lookup was issued for.
#[async_trait]
pub trait CompanyRegistryPort: Send + Sync {
    async fn lookup(&self, cnpj: &Cnpj) -> Result<CompanyRecord, LookupError>;
}
