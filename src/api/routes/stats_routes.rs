//! Stats Routes
//!
//! 定义统计相关的 API 路由。

use crate::api::handlers::stats_handler::*;
use axum::{Router, routing::get};

use crate::api::app_state::AppState;

/// 创建统计路由器
pub fn create_stats_router() -> Router<AppState> {
    Router::new().route("/stats", get(stats))
}
