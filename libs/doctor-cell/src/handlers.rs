use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::SendMessageRequest;
use crate::router::DoctorState;
use crate::services::directory::MESSAGE_RECEIVERS;

pub async fn list_doctors(State(state): State<Arc<DoctorState>>) -> Json<Value> {
    Json(json!({
        "doctors": state.directory.all(),
    }))
}

/// Returns the freshest snapshot available. A remote failure falls back to the
/// last loaded messages and is flagged as `stale`.
pub async fn list_conversations(State(state): State<Arc<DoctorState>>) -> Json<Value> {
    let (messages, stale) = match state.conversations.refresh().await {
        Ok(messages) => (messages, false),
        Err(_) => (state.conversations.messages().await, true),
    };

    Json(json!({
        "messages": messages,
        "receivers": MESSAGE_RECEIVERS,
        "stale": stale,
    }))
}

pub async fn send_message(
    State(state): State<Arc<DoctorState>>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<Value>, AppError> {
    let message = state.conversations.send(request).await?;
    Ok(Json(json!(message)))
}
