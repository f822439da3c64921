use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::application::{ChatClient, ChatClientFactory};
use crate::domain::{CompletionRequest, Credential, DomainError};

/// Default target: the Hugging Face inference router.
pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// HTTP client for an OpenAI-compatible chat-completions endpoint, by default
/// the Hugging Face router.
///
/// One instance is bound to one caller credential and is meant to be dropped
/// after the call; see [`HuggingFaceClientFactory`].
pub struct HuggingFaceChatClient {
    client: reqwest::Client,
    credential: Credential,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl HuggingFaceChatClient {
    pub fn new(client: reqwest::Client, credential: Credential, base_url: &str) -> Self {
        Self {
            client,
            credential,
            url: completions_url(base_url),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Pull the first choice's text out of a response body.
    fn parse_completion(body: &str) -> Result<String, DomainError> {
        let response: ApiResponse = serde_json::from_str(body).map_err(|e| {
            DomainError::inference(format!("failed to parse response: {e}"))
        })?;

        response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.unwrap_or_default())
            .ok_or_else(|| DomainError::inference("response contained no choices"))
    }
}

#[async_trait]
impl ChatClient for HuggingFaceChatClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        let body = ApiRequest {
            model: request.model(),
            max_tokens: request.max_tokens(),
            messages: request
                .messages()
                .iter()
                .map(|m| ApiMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(self.credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::inference(format!("request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| DomainError::inference(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            warn!("HuggingFaceChatClient: API returned {status}: {text}");
            return Err(DomainError::inference(format!("API returned {status}: {text}")));
        }

        Self::parse_completion(&text)
    }
}

/// Shares one connection pool across requests while handing out a fresh,
/// credential-scoped [`HuggingFaceChatClient`] per generation.
pub struct HuggingFaceClientFactory {
    client: reqwest::Client,
    base_url: String,
}

impl HuggingFaceClientFactory {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for HuggingFaceClientFactory {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ChatClientFactory for HuggingFaceClientFactory {
    fn client(&self, credential: &Credential) -> Box<dyn ChatClient> {
        Box::new(HuggingFaceChatClient::new(
            self.client.clone(),
            credential.clone(),
            &self.base_url,
        ))
    }
}

fn completions_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), COMPLETIONS_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_completion_takes_first_choice() {
        let body = r#"{"choices":[
            {"message":{"role":"assistant","content":"  SELECT 1;\n"}},
            {"message":{"role":"assistant","content":"SELECT 2;"}}
        ]}"#;
        let text = HuggingFaceChatClient::parse_completion(body).unwrap();
        assert_eq!(text, "  SELECT 1;\n");
    }

    #[test]
    fn parse_completion_tolerates_null_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        assert_eq!(HuggingFaceChatClient::parse_completion(body).unwrap(), "");
    }

    #[test]
    fn parse_completion_rejects_empty_choices() {
        let err = HuggingFaceChatClient::parse_completion(r#"{"choices":[]}"#).unwrap_err();
        assert_eq!(err.to_string(), "Inference error: response contained no choices");
    }

    #[test]
    fn parse_completion_rejects_non_json() {
        let err = HuggingFaceChatClient::parse_completion("<html>bad gateway</html>").unwrap_err();
        assert!(err.to_string().contains("failed to parse response"));
    }

    #[test]
    fn url_strips_trailing_slash() {
        let client = HuggingFaceChatClient::new(
            reqwest::Client::new(),
            Credential::new("hf_x"),
            "http://localhost:8080/",
        );
        assert_eq!(client.url(), "http://localhost:8080/v1/chat/completions");
    }
}
