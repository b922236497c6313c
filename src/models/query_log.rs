//! 查询日志模型
//!
//! 每次验证请求写入一条记录，只追加，不修改不删除。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::confidence::ConfidenceLevel;

/// 查询日志条目
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QueryLogEntry {
    /// 自增主键（写入前为 0）
    #[serde(default)]
    pub id: i64,
    /// 查询文本
    pub query_text: String,
    /// 结果数量
    pub result_count: i64,
    /// 置信度标签
    pub confidence_level: String,
    /// 写入时间
    pub timestamp: DateTime<Utc>,
}

impl QueryLogEntry {
    /// 创建新日志条目，时间戳取当前时间
    pub fn new(query_text: &str, result_count: usize, confidence: ConfidenceLevel) -> Self {
        Self {
            id: 0,
            query_text: query_text.to_string(),
            result_count: result_count as i64,
            confidence_level: confidence.as_str().to_string(),
            timestamp: Utc::now(),
        }
    }
}
