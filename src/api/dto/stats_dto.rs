//! 统计接口 DTO

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::QueryLogEntry;

/// 最近查询条目
#[derive(Debug, Serialize)]
pub struct RecentQueryResponse {
    /// 查询文本
    pub query: String,
    /// 结果数量
    pub results: i64,
    /// 置信度标签
    pub confidence: String,
    /// 写入时间
    pub timestamp: DateTime<Utc>,
}

impl From<QueryLogEntry> for RecentQueryResponse {
    fn from(entry: QueryLogEntry) -> Self {
        Self {
            query: entry.query_text,
            results: entry.result_count,
            confidence: entry.confidence_level,
            timestamp: entry.timestamp,
        }
    }
}

/// 统计响应
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// 查询总数
    pub total_queries: i64,
    /// 最近查询，新的在前
    pub recent_queries: Vec<RecentQueryResponse>,
}
