//! Company domain module.
//!
//! Types describing a company as known to the national registry.

mod cnpj;
mod record;

pub use cnpj::{Cnpj, InvalidCnpj};
pub use record::{Address, CompanyRecord, IndustryActivity};
