//! Registration submission client.
//!
//! `PUT {base}/cnpj/{digits}` with the classification answers. The
//! acknowledgement body carries nothing the wizard needs, so only the status
//! is inspected.

use async_trait::async_trait;
use log::{debug, error};
use serde::Serialize;

use lb_core::ports::{RegistrationPort, SubmitError};
use lb_core::signup::{Registration, ServiceKind};

use crate::config::EndpointConfig;

pub struct RegistrationClient {
    http: reqwest::Client,
    base_url: String,
}

impl RegistrationClient {
    pub fn new(config: &EndpointConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl RegistrationPort for RegistrationClient {
    async fn submit(&self, registration: &Registration) -> Result<(), SubmitError> {
        let url = format!("{}/cnpj/{}", self.base_url, registration.cnpj.as_str());
        let body = RegistrationDto::from(registration);
        debug!("submitting registration for CNPJ {}", registration.cnpj);

        let response = self
            .http
            .put(&url)
            .json(&body)
            .send()
            .await
            .map_err(submit_error)?;

        let status = response.status();
        if !status.is_success() {
            error!("registration rejected with status {}", status);
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

/// Wire shape expected by the backend. Field names match its pt-BR API.
#[derive(Debug, Serialize)]
struct RegistrationDto<'a> {
    username: &'a str,
    cnpj: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    prestadora_servico: Option<&'static str>,
    ramo: &'a str,
}

impl<'a> From<&'a Registration> for RegistrationDto<'a> {
    fn from(registration: &'a Registration) -> Self {
        Self {
            username: &registration.name,
            cnpj: registration.cnpj.as_str(),
            prestadora_servico: registration
                .classification
                .service_kind
                .map(service_kind_label),
            ramo: &registration.classification.industry,
        }
    }
}

fn service_kind_label(kind: ServiceKind) -> &'static str {
    match kind {
        ServiceKind::Services => "Sim",
        ServiceKind::Products => "Não",
    }
}

fn submit_error(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        SubmitError::Timeout
    } else {
        SubmitError::Transport(err.to_string())
    }
}
