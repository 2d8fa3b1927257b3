use serde::{Deserialize, Serialize};

use crate::company::Cnpj;
use crate::signup::Classification;

/// Aggregate handed to the backend once the wizard reaches the submit
/// trigger: identity, tax id and classification answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub cnpj: Cnpj,
    pub classification: Classification,
}
