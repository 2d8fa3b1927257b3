//! FAQ chatbot client.
//!
//! `POST {base}` with `{"message": …}`. Depending on the deployment the bot
//! answers either a bare JSON string or `{"answer": …}`; both normalize to a
//! plain string.

use async_trait::async_trait;
use log::debug;
use serde::Serialize;
use serde_json::Value;

use lb_core::ports::{ChatError, ChatbotPort};

use crate::config::EndpointConfig;

pub struct HttpChatbotClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpChatbotClient {
    pub fn new(config: &EndpointConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }
}

#[derive(Debug, Serialize)]
struct QuestionDto<'a> {
    message: &'a str,
}

#[async_trait]
impl ChatbotPort for HttpChatbotClient {
    async fn ask(&self, message: &str) -> Result<String, ChatError> {
        debug!("sending chatbot question");

        let response = self
            .http
            .post(&self.base_url)
            .json(&QuestionDto { message })
            .send()
            .await
            .map_err(chat_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Transport(format!("status {}", status)));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| ChatError::InvalidPayload(err.to_string()))?;
        answer_from_payload(payload)
    }
}

fn answer_from_payload(payload: Value) -> Result<String, ChatError> {
    match payload {
        Value::String(answer) => Ok(answer),
        Value::Object(mut map) => match map.remove("answer") {
            Some(Value::String(answer)) => Ok(answer),
            _ => Err(ChatError::InvalidPayload(
                "missing answer field".to_string(),
            )),
        },
        other => Err(ChatError::InvalidPayload(format!(
            "unexpected payload: {}",
            other
        ))),
    }
}

fn chat_error(err: reqwest::Error) -> ChatError {
    if err.is_timeout() {
        ChatError::Timeout
    } else {
        ChatError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn build_client(base_url: String) -> HttpChatbotClient {
        HttpChatbotClient::new(&EndpointConfig::new(base_url)).unwrap()
    }

    #[tokio::test]
    async fn bare_string_answer_is_returned_as_is() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_body(Matcher::Json(serde_json::json!({
                "message": "O que é um CNPJ?"
            })))
            .with_status(200)
            .with_body(r#""É o cadastro nacional da pessoa jurídica.""#)
            .create_async()
            .await;
        let client = build_client(server.url());

        let answer = client.ask("O que é um CNPJ?").await.unwrap();

        mock.assert_async().await;
        assert_eq!(answer, "É o cadastro nacional da pessoa jurídica.");
    }

    #[tokio::test]
    async fn wrapped_answer_is_unwrapped() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"answer": "Para identificar a empresa."}"#)
            .create_async()
            .await;
        let client = build_client(server.url());

        let answer = client.ask("Por que colocar o CNPJ?").await.unwrap();

        assert_eq!(answer, "Para identificar a empresa.");
    }

    #[tokio::test]
    async fn object_without_answer_is_an_invalid_payload() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"reply": "algo"}"#)
            .create_async()
            .await;
        let client = build_client(server.url());

        let result = client.ask("O que é um CNPJ?").await;

        assert!(matches!(result, Err(ChatError::InvalidPayload(_))));
    }

    #[tokio::test]
    async fn server_error_is_a_transport_failure() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(503)
            .create_async()
            .await;
        let client = build_client(server.url());

        let result = client.ask("O que é um CNPJ?").await;

        assert!(matches!(result, Err(ChatError::Transport(_))));
    }
}
