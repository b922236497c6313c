use axum::{Json, extract::State, response::IntoResponse};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::stats_dto::*},
    error::AppError,
};

/// 最近查询返回条数
const RECENT_LIMIT: i64 = 10;

/// 查询日志统计视图
pub async fn stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    debug!("stats requested");

    let total_queries = state.query_log.count().await?;
    let recent = state.query_log.recent(RECENT_LIMIT).await?;

    let response = StatsResponse {
        total_queries,
        recent_queries: recent.into_iter().map(RecentQueryResponse::from).collect(),
    };

    Ok(Json(response))
}
