//! Internal backend registry client.
//!
//! Same lookup operation as the public registry, against the product
//! backend: `GET {base}/cnpj/{digits}`. The backend answers a flat payload
//! with the address already formatted.

use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use serde::Deserialize;

use lb_core::company::{Cnpj, CompanyRecord, IndustryActivity};
use lb_core::ports::{CompanyRegistryPort, LookupError};

use crate::config::EndpointConfig;
use crate::registry::lookup_error;

pub struct BackendRegistryClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendRegistryClient {
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
impl CompanyRegistryPort for BackendRegistryClient {
    async fn lookup(&self, cnpj: &Cnpj) -> Result<CompanyRecord, LookupError> {
        let url = format!("{}/cnpj/{}", self.base_url, cnpj.as_str());
        debug!("looking up CNPJ {} at backend {}", cnpj, url);

        let response = self.http.get(&url).send().await.map_err(lookup_error)?;
        match response.status() {
            StatusCode::NOT_FOUND => return Err(LookupError::NotFound),
            status if !status.is_success() => {
                return Err(LookupError::Transport(format!(
                    "backend respondeu com status {}",
                    status
                )))
            }
            _ => {}
        }

        let dto: BackendCompanyDto = response
            .json()
            .await
            .map_err(|err| LookupError::InvalidPayload(err.to_string()))?;
        Ok(record_from_backend(cnpj.clone(), dto))
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct BackendCompanyDto {
    razao_social: Option<String>,
    nome_fantasia: Option<String>,
    /// Activity description only; the backend does not expose the code.
    cnae: Option<String>,
    endereco: Option<String>,
    telefone: Option<String>,
    email: Option<String>,
    socios: Option<Vec<String>>,
}

/// Normalizes the flat backend shape into the same record the public
/// registry produces.
pub(crate) fn record_from_backend(cnpj: Cnpj, dto: BackendCompanyDto) -> CompanyRecord {
    CompanyRecord {
        cnpj,
        legal_name: dto.razao_social.unwrap_or_default(),
        trade_name: dto.nome_fantasia.unwrap_or_default(),
        industry: IndustryActivity {
            code: String::new(),
            description: dto.cnae.unwrap_or_default(),
        },
        address: dto.endereco.unwrap_or_default(),
        phone: dto.telefone.unwrap_or_default(),
        email: dto.email.unwrap_or_default(),
        owners: dto.socios.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn cnpj() -> Cnpj {
        Cnpj::parse("12345678000190").unwrap()
    }

    fn build_client(base_url: String) -> BackendRegistryClient {
        BackendRegistryClient::new(&EndpointConfig::new(base_url)).unwrap()
    }

    #[tokio::test]
    async fn lookup_normalizes_flat_payload() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/cnpj/12345678000190")
            .with_status(200)
            .with_body(
                r#"{
                    "cnpj": "12345678000190",
                    "razao_social": "Ana LTDA",
                    "nome_fantasia": "Ana Tech",
                    "cnae": "Desenvolvimento de programas de computador",
                    "endereco": "Rua das Flores, 100 - Centro, Fortaleza - CE, 60000000",
                    "telefone": "85999990000",
                    "email": "contato@anatech.com.br",
                    "socios": ["Ana Souza"]
                }"#,
            )
            .create_async()
            .await;
        let client = build_client(server.url());

        let record = client.lookup(&cnpj()).await.unwrap();

        assert_eq!(record.cnpj, cnpj());
        assert_eq!(record.legal_name, "Ana LTDA");
        assert_eq!(record.trade_name, "Ana Tech");
        assert_eq!(record.industry.code, "");
        assert_eq!(
            record.industry.description,
            "Desenvolvimento de programas de computador"
        );
        assert_eq!(
            record.address,
            "Rua das Flores, 100 - Centro, Fortaleza - CE, 60000000"
        );
        assert_eq!(record.owners, vec!["Ana Souza"]);
    }

    #[tokio::test]
    async fn both_registry_shapes_normalize_to_the_same_record() {
        let flat = record_from_backend(
            cnpj(),
            serde_json::from_str(
                r#"{
                    "razao_social": "Ana LTDA",
                    "nome_fantasia": "Ana Tech",
                    "endereco": "Rua das Flores, 100 - Centro, Fortaleza - CE, 60000000",
                    "telefone": "85999990000",
                    "email": "contato@anatech.com.br",
                    "socios": ["Ana Souza"]
                }"#,
            )
            .unwrap(),
        );
        let nested = crate::registry::public_api::record_from_public(
            cnpj(),
            serde_json::from_str(
                r#"{
                    "razao_social": "Ana LTDA",
                    "estabelecimento": {
                        "nome_fantasia": "Ana Tech",
                        "logradouro": "Rua das Flores",
                        "numero": "100",
                        "bairro": "Centro",
                        "cidade": { "nome": "Fortaleza" },
                        "estado": { "sigla": "CE" },
                        "cep": "60000000",
                        "telefone1": "85999990000",
                        "email": "contato@anatech.com.br"
                    },
                    "socios": [{ "nome": "Ana Souza" }]
                }"#,
            )
            .unwrap(),
        );

        // the backend omits the activity; everything else lines up
        assert_eq!(flat.legal_name, nested.legal_name);
        assert_eq!(flat.trade_name, nested.trade_name);
        assert_eq!(flat.address, nested.address);
        assert_eq!(flat.phone, nested.phone);
        assert_eq!(flat.email, nested.email);
        assert_eq!(flat.owners, nested.owners);
    }

    #[tokio::test]
    async fn missing_fields_default_to_empty() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/cnpj/12345678000190")
            .with_status(200)
            .with_body(r#"{"razao_social": "Ana LTDA"}"#)
            .create_async()
            .await;
        let client = build_client(server.url());

        let record = client.lookup(&cnpj()).await.unwrap();

        assert_eq!(record.legal_name, "Ana LTDA");
        assert_eq!(record.trade_name, "");
        assert_eq!(record.address, "");
        assert!(record.owners.is_empty());
    }

    #[tokio::test]
    async fn not_found_maps_to_lookup_not_found() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/cnpj/12345678000190")
            .with_status(404)
            .create_async()
            .await;
        let client = build_client(server.url());

        assert_eq!(client.lookup(&cnpj()).await, Err(LookupError::NotFound));
    }
}
