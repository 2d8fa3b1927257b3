use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Field-scoped validation failure. Synchronous and recoverable: the user
/// corrects the field and retries. `Display` carries the message rendered
/// under the rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("O nome deve ter pelo menos {min} caracteres")]
    NameTooShort { min: usize },

    #[error("O nome deve ter no máximo {max} caracteres")]
    NameTooLong { max: usize },

    #[error("CNPJ deve ter 14 dígitos numéricos")]
    InvalidCnpj,

    #[error("Informe se a empresa é prestadora de serviço ou de produtos")]
    MissingServiceKind,

    #[error("Informe o ramo da empresa")]
    MissingIndustry,
}
