use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload?;

    let request_id = Uuid::new_v4();
    let span = tracing::info_span!(
        "chat",
        %request_id,
        user_id = payload.user_id.as_deref().unwrap_or("-"),
    );

    let reply = state
        .handler
        .handle_chat(&payload.message, payload.user_id.as_deref())
        .instrument(span)
        .await?;

    Ok(Json(ChatResponse { reply }))
}
