use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::debug;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    // An unreadable body carries no message either.
    let message = match payload {
        Ok(Json(ChatRequest {
            message: Some(message),
        })) if !message.is_empty() => message,
        Ok(_) => return Err(AppError::MissingMessage),
        Err(rejection) => {
            debug!(%rejection, "chat body rejected");
            return Err(AppError::MissingMessage);
        }
    };

    // Whitespace-only messages are forwarded as-is.
    let reply = state.relay.relay(&message).await?;

    Ok(Json(ChatResponse { reply }))
}
