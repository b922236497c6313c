use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::verify_dto::*},
    error::AppError,
};

/// 验证一条陈述
///
/// 空白陈述在这里拒绝，编排层假定查询非空。
pub async fn verify(
    State(state): State<AppState>,
    Json(request): Json<VerifyRequest>,
) -> Result<Response, AppError> {
    let statement = request.statement.trim();

    if statement.is_empty() {
        let body = VerifyErrorResponse {
            error: "No query provided".to_string(),
            found: false,
        };
        return Ok((StatusCode::BAD_REQUEST, Json(body)).into_response());
    }

    debug!(
        "received verification request: '{}' (fetching up to {} papers)",
        statement, state.paper_limit
    );

    let outcome = state
        .verification_service
        .verify(statement, state.paper_limit)
        .await;

    Ok(Json(VerifyResponse::from(outcome)).into_response())
}
