use serde::{Deserialize, Serialize};

use crate::company::Cnpj;

/// Main economic activity (CNAE) of a company.
///
/// Registries that only expose the activity description leave `code` empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryActivity {
    pub code: String,
    pub description: String,
}

/// Company address as registered with the national registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub district: String,
    pub city: String,
    /// Two-letter state abbreviation.
    pub state: String,
    pub postal_code: String,
}

impl Address {
    /// Single-line form shown on the review screen.
    pub fn formatted(&self) -> String {
        format!(
            "{}, {} - {}, {} - {}, {}",
            self.street, self.number, self.district, self.city, self.state, self.postal_code
        )
    }
}

/// Company attributes returned by a registry lookup.
///
/// Optional registry sub-fields are normalized to empty strings/lists rather
/// than left absent, so the review screen can render every field. `cnpj` is
/// always the identifier the lookup was issued for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub cnpj: Cnpj,
    pub legal_name: String,
    pub trade_name: String,
    pub industry: IndustryActivity,
    /// Pre-formatted single-line address (see [`Address::formatted`]).
    pub address: String,
    pub phone: String,
    pub email: String,
    /// Partner/owner names; empty when the registry lists none.
    pub owners: Vec<String>,
}
