// src/services/upstream.rs
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::config::UpstreamConfig;

const CHAT_ENDPOINT: &str = "chat/completions";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    System,
    User,
}

/// One entry of the `messages` list sent to the completion API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub content: String,
}

impl ChatTurn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to completion API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("completion API response could not be parsed: {0}")]
    Malformed(String),

    #[error("completion API returned no reply text")]
    EmptyReply,
}

/// A chat-completion provider: takes the full turn list, returns the assistant text.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, turns: &[ChatTurn]) -> Result<String, UpstreamError>;
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatTurn],
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// Client for any OpenAI-compatible `/chat/completions` endpoint (OpenRouter by default).
pub struct OpenAiCompatibleClient {
    client: Client,
    api_key: String,
    model: String,
    url: String,
}

impl OpenAiCompatibleClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl AsRef<str>,
    ) -> Self {
        let url = format!(
            "{}/{CHAT_ENDPOINT}",
            base_url.as_ref().trim_end_matches('/')
        );
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            url,
        }
    }

    pub fn from_config(config: &UpstreamConfig) -> Self {
        Self::new(&config.api_key, &config.model, &config.base_url)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatCompletion for OpenAiCompatibleClient {
    async fn complete(&self, turns: &[ChatTurn]) -> Result<String, UpstreamError> {
        let request = CompletionRequest {
            model: &self.model,
            messages: turns,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, %body, "completion API returned an error status");
            return Err(UpstreamError::Status { status, body });
        }

        let body = response.text().await?;
        let parsed: CompletionResponse =
            serde_json::from_str(&body).map_err(|e| UpstreamError::Malformed(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(UpstreamError::EmptyReply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_without_double_slash() {
        let client = OpenAiCompatibleClient::new("k", "m", "https://openrouter.ai/api/v1/");
        assert_eq!(client.url(), "https://openrouter.ai/api/v1/chat/completions");
    }

    #[test]
    fn turns_serialize_with_lowercase_roles() {
        let turns = [ChatTurn::system("rules"), ChatTurn::user("hi")];
        let json = serde_json::to_value(CompletionRequest {
            model: "gpt-3.5-turbo",
            messages: &turns,
        })
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "model": "gpt-3.5-turbo",
                "messages": [
                    {"role": "system", "content": "rules"},
                    {"role": "user", "content": "hi"}
                ]
            })
        );
    }
}
