use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::warn;

use crate::message::{ChatRequest, ChatResponse, ErrorResponse};

/// Shown in place of a reply when the relay could not be reached or answered badly.
pub const FALLBACK_REPLY: &str = "Server error. Try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Reply(String),
    Failed(FailureReason),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    #[error("relay unreachable: {0}")]
    Transport(String),

    #[error("relay returned {status}")]
    Server { status: u16, error: Option<String> },

    #[error("relay response could not be read: {0}")]
    InvalidBody(String),
}

impl FailureReason {
    /// Text to put in the transcript: the server's own error when it sent one.
    pub fn display_text(&self) -> &str {
        match self {
            FailureReason::Server {
                error: Some(error), ..
            } if !error.is_empty() => error.as_str(),
            _ => FALLBACK_REPLY,
        }
    }
}

/// One request to the relay. Implementations never return an error; every
/// failure is folded into [`SendOutcome::Failed`].
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, message: &str) -> SendOutcome;
}

/// Talks to the relay's `POST /chat` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    pub fn new(backend_url: impl AsRef<str>) -> Self {
        Self {
            client: Client::new(),
            url: format!("{}/chat", backend_url.as_ref().trim_end_matches('/')),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(&self, message: &str) -> SendOutcome {
        let request = ChatRequest {
            message: Some(message.to_string()),
        };

        let response = match self.client.post(&self.url).json(&request).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, url = %self.url, "chat request failed");
                return SendOutcome::Failed(FailureReason::Transport(e.to_string()));
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return SendOutcome::Failed(FailureReason::Transport(e.to_string())),
        };

        if status.is_success() {
            match serde_json::from_str::<ChatResponse>(&body) {
                Ok(parsed) => SendOutcome::Reply(parsed.reply),
                Err(e) => SendOutcome::Failed(FailureReason::InvalidBody(e.to_string())),
            }
        } else {
            let error = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .map(|parsed| parsed.error);
            SendOutcome::Failed(FailureReason::Server {
                status: status.as_u16(),
                error,
            })
        }
    }
}
