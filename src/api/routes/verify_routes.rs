//! Verify Routes
//!
//! 定义验证相关的 API 路由。

use crate::api::handlers::verify_handler::*;
use axum::{Router, routing::post};

use crate::api::app_state::AppState;

/// 创建验证路由器
pub fn create_verify_router() -> Router<AppState> {
    Router::new().route("/verify", post(verify))
}
