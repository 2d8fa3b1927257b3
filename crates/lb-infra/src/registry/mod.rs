//! Company registry clients.
//!
//! Two registry backends answer the same lookup: the public national
//! registry (nested payload) and the internal backend (flat payload). Each
//! client normalizes its own wire shape into the one `CompanyRecord`.

mod backend_api;
mod public_api;

pub use backend_api::BackendRegistryClient;
pub use public_api::PublicRegistryClient;

use lb_core::ports::LookupError;

pub(crate) fn lookup_error(err: reqwest::Error) -> LookupError {
    if err.is_timeout() {
        LookupError::Timeout
    } else {
        LookupError::Transport(err.to_string())
    }
}
