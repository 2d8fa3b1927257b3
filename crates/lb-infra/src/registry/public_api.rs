//! Public national registry client.
//!
//! `GET {base}/cnpj/{digits}` against the public CNPJ registry. The payload
//! nests most attributes under `estabelecimento` and uses explicit nulls for
//! missing values, so every DTO field is optional and normalization defaults
//! them to empty strings/lists.

use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use serde::Deserialize;

use lb_core::company::{Address, Cnpj, CompanyRecord, IndustryActivity};
use lb_core::ports::{CompanyRegistryPort, LookupError};

use crate::config::EndpointConfig;
use crate::registry::lookup_error;

pub struct PublicRegistryClient {
    http: reqwest::Client,
    base_url: String,
}

impl PublicRegistryClient {
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
impl CompanyRegistryPort for PublicRegistryClient {
    async fn lookup(&self, cnpj: &Cnpj) -> Result<CompanyRecord, LookupError> {
        let url = format!("{}/cnpj/{}", self.base_url, cnpj.as_str());
        debug!("looking up CNPJ {} at {}", cnpj, url);

        let response = self.http.get(&url).send().await.map_err(lookup_error)?;
        match response.status() {
            StatusCode::NOT_FOUND => return Err(LookupError::NotFound),
            status if !status.is_success() => {
                return Err(LookupError::Transport(format!(
                    "registro público respondeu com status {}",
                    status
                )))
            }
            _ => {}
        }

        let dto: PublicCompanyDto = response
            .json()
            .await
            .map_err(|err| LookupError::InvalidPayload(err.to_string()))?;
        Ok(record_from_public(cnpj.clone(), dto))
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PublicCompanyDto {
    razao_social: Option<String>,
    estabelecimento: Option<PublicEstablishmentDto>,
    socios: Option<Vec<PublicPartnerDto>>,
}

#[derive(Debug, Default, Deserialize)]
struct PublicEstablishmentDto {
    nome_fantasia: Option<String>,
    atividade_principal: Option<PublicActivityDto>,
    logradouro: Option<String>,
    numero: Option<String>,
    bairro: Option<String>,
    cidade: Option<PublicCityDto>,
    estado: Option<PublicStateDto>,
    cep: Option<String>,
    telefone1: Option<String>,
    email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PublicActivityDto {
    id: Option<String>,
    descricao: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PublicCityDto {
    nome: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PublicStateDto {
    sigla: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PublicPartnerDto {
    nome: Option<String>,
}

/// Normalizes the public registry shape. `cnpj` is the identifier the lookup
/// was issued for; the record is keyed by it regardless of what the payload
/// echoes back.
pub(crate) fn record_from_public(cnpj: Cnpj, dto: PublicCompanyDto) -> CompanyRecord {
    let establishment = dto.estabelecimento.unwrap_or_default();
    let activity = establishment.atividade_principal.unwrap_or_default();
    let address = Address {
        street: establishment.logradouro.unwrap_or_default(),
        number: establishment.numero.unwrap_or_default(),
        district: establishment.bairro.unwrap_or_default(),
        city: establishment
            .cidade
            .unwrap_or_default()
            .nome
            .unwrap_or_default(),
        state: establishment
            .estado
            .unwrap_or_default()
            .sigla
            .unwrap_or_default(),
        postal_code: establishment.cep.unwrap_or_default(),
    };

    CompanyRecord {
        cnpj,
        legal_name: dto.razao_social.unwrap_or_default(),
        trade_name: establishment.nome_fantasia.unwrap_or_default(),
        industry: IndustryActivity {
            code: activity.id.unwrap_or_default(),
            description: activity.descricao.unwrap_or_default(),
        },
        address: address.formatted(),
        phone: establishment.telefone1.unwrap_or_default(),
        email: establishment.email.unwrap_or_default(),
        owners: dto
            .socios
            .unwrap_or_default()
            .into_iter()
            .filter_map(|partner| partner.nome)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn cnpj() -> Cnpj {
        Cnpj::parse("12345678000190").unwrap()
    }

    fn build_client(base_url: String) -> PublicRegistryClient {
        PublicRegistryClient::new(&EndpointConfig::new(base_url)).unwrap()
    }

    fn sample_payload() -> &'static str {
        r#"{
            "razao_social": "Ana LTDA",
            "estabelecimento": {
                "cnpj": "12345678000190",
                "nome_fantasia": "Ana Tech",
                "atividade_principal": {
                    "id": "6201-5/01",
                    "descricao": "Desenvolvimento de programas de computador"
                },
                "logradouro": "Rua das Flores",
                "numero": "100",
                "bairro": "Centro",
                "cidade": { "nome": "Fortaleza" },
                "estado": { "sigla": "CE" },
                "cep": "60000000",
                "telefone1": "85999990000",
                "email": "contato@anatech.com.br"
            },
            "socios": [
                { "nome": "Ana Souza" },
                { "nome": "Rui Souza" }
            ]
        }"#
    }

    #[tokio::test]
    async fn lookup_normalizes_nested_payload() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/cnpj/12345678000190")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(sample_payload())
            .create_async()
            .await;
        let client = build_client(server.url());

        let record = client.lookup(&cnpj()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(record.cnpj, cnpj());
        assert_eq!(record.legal_name, "Ana LTDA");
        assert_eq!(record.trade_name, "Ana Tech");
        assert_eq!(record.industry.code, "6201-5/01");
        assert_eq!(
            record.address,
            "Rua das Flores, 100 - Centro, Fortaleza - CE, 60000000"
        );
        assert_eq!(record.owners, vec!["Ana Souza", "Rui Souza"]);
    }

    #[tokio::test]
    async fn lookup_defaults_null_fields_to_empty() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/cnpj/12345678000190")
            .with_status(200)
            .with_body(
                r#"{
                    "razao_social": "Ana LTDA",
                    "estabelecimento": {
                        "nome_fantasia": null,
                        "logradouro": null,
                        "cidade": null,
                        "estado": null
                    },
                    "socios": null
                }"#,
            )
            .create_async()
            .await;
        let client = build_client(server.url());

        let record = client.lookup(&cnpj()).await.unwrap();

        assert_eq!(record.legal_name, "Ana LTDA");
        assert_eq!(record.trade_name, "");
        assert_eq!(record.phone, "");
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

        let result = client.lookup(&cnpj()).await;

        assert_eq!(result, Err(LookupError::NotFound));
    }

    #[tokio::test]
    async fn malformed_body_maps_to_invalid_payload() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/cnpj/12345678000190")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;
        let client = build_client(server.url());

        let result = client.lookup(&cnpj()).await;

        assert!(matches!(result, Err(LookupError::InvalidPayload(_))));
    }

    #[tokio::test]
    async fn server_error_maps_to_transport() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/cnpj/12345678000190")
            .with_status(502)
            .create_async()
            .await;
        let client = build_client(server.url());

        let result = client.lookup(&cnpj()).await;

        assert!(matches!(result, Err(LookupError::Transport(_))));
    }
}
