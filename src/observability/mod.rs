//! 可观测性模块
//!
//! 提供健康检查端点。

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// 健康检查状态
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// 服务状态
    pub status: String,
    /// 版本号
    pub version: String,
    /// 启动时间
    pub started_at: DateTime<Utc>,
    /// 当前时间
    pub timestamp: DateTime<Utc>,
}

/// 可观测性状态
pub struct ObservabilityState {
    version: String,
    started_at: DateTime<Utc>,
}

impl ObservabilityState {
    /// 创建可观测性状态
    pub fn new(version: String) -> Self {
        Self {
            version,
            started_at: Utc::now(),
        }
    }
}

async fn health(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: state.version.clone(),
        started_at: state.started_at,
        timestamp: Utc::now(),
    })
}

/// 创建可观测性路由
pub fn create_observability_router(state: Arc<ObservabilityState>) -> Router {
    Router::new().route("/health", get(health)).with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_returns_ok() {
        let router = create_observability_router(Arc::new(ObservabilityState::new(
            env!("CARGO_PKG_VERSION").to_string(),
        )));

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
