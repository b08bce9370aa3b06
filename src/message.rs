// src/message.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /chat`. `message` stays optional so an absent field can be
/// answered with a 400 instead of an extractor rejection.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
