//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{infrastructure::dto::http::SendMessageRequestDto, ui::state::AppState};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Publish a message to the channel on behalf of the request's sender.
///
/// publish の完了は待たずに常に 200 を返す（fire-and-forget）。
/// publish の失敗はログに記録されるだけで、レスポンスには反映されない。
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SendMessageRequestDto>,
) -> StatusCode {
    let usecase = state.dispatch_message_usecase.clone();
    tokio::spawn(async move {
        match usecase.execute(body.sender).await {
            Ok(message) => tracing::debug!("Dispatched message: {}", message.text),
            Err(e) => tracing::warn!("Failed to dispatch message: {}", e),
        }
    });

    StatusCode::OK
}
