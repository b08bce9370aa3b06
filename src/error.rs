// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{message::ErrorResponse, services::upstream::UpstreamError};

pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Message is required")]
    MissingMessage,

    #[error("upstream completion failed: {0}")]
    Upstream(#[from] UpstreamError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::MissingMessage => {
                tracing::debug!("rejected chat request without a message");
                (StatusCode::BAD_REQUEST, MESSAGE_REQUIRED)
            }
            AppError::Upstream(err) => {
                // Full detail stays in the server log; the caller gets a generic body.
                tracing::error!(error = %err, "chat relay failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
            }),
        )
            .into_response()
    }
}
