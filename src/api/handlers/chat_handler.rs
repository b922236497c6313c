use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;
use uuid::Uuid;

use crate::{
    api::{app_state::AppState, dto::chat_dto::*},
    error::AppError,
};

/// 对话一轮
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Response, AppError> {
    let message = request.message.trim();

    if message.is_empty() {
        let body = ChatErrorResponse {
            error: "No message provided".to_string(),
            reply: "Please enter a message.".to_string(),
        };
        return Ok((StatusCode::BAD_REQUEST, Json(body)).into_response());
    }

    let session_id = request
        .session_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    debug!("chatbot request for session '{}'", session_id);

    let reply = state.assistant.reply(&session_id, message).await;

    Ok(Json(ChatResponse { session_id, reply }).into_response())
}

/// 清空会话历史
pub async fn clear_chat(
    State(state): State<AppState>,
    Json(request): Json<ClearChatRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.session_id.trim().is_empty() {
        return Err(AppError::Validation("No session_id provided".to_string()));
    }

    state.assistant.clear(&request.session_id);

    Ok(Json(ClearChatResponse {
        status: "Chat history cleared".to_string(),
    }))
}
