//! 验证编排服务
//!
//! 串联聚合 → 置信度 → 日志落盘 → 摘要生成，组装最终结果。
//! 内部协作方的失败全部就地降级，整个请求不会因此失败。

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::models::{ConfidenceLevel, Paper, QueryLogEntry};
use crate::services::aggregator::ResultAggregator;
use crate::services::summary::{NO_PAPERS_SUMMARY, SummaryGenerator};
use crate::storage::query_log_repository::QueryLogRepository;

/// 单次验证的结果
#[derive(Debug, Clone, Serialize)]
pub struct VerificationOutcome {
    /// 是否找到支持论文
    pub found: bool,
    /// 置信度等级
    pub confidence: ConfidenceLevel,
    /// 结果数量
    pub result_count: usize,
    /// AI 综述或固定文案
    pub summary: String,
    /// 论文列表
    pub results: Vec<Paper>,
}

/// 验证编排器
pub struct VerificationService {
    aggregator: ResultAggregator,
    summary: SummaryGenerator,
    query_log: Arc<dyn QueryLogRepository>,
}

impl VerificationService {
    /// 创建验证服务
    pub fn new(
        aggregator: ResultAggregator,
        summary: SummaryGenerator,
        query_log: Arc<dyn QueryLogRepository>,
    ) -> Self {
        Self {
            aggregator,
            summary,
            query_log,
        }
    }

    /// 验证一条陈述
    ///
    /// 空白查询由路由层拒绝，这里假定 query 非空。
    pub async fn verify(&self, query: &str, total_limit: usize) -> VerificationOutcome {
        info!("processing query '{}' (limit {} papers)", query, total_limit);

        let papers = self.aggregator.aggregate(query, total_limit).await;
        let result_count = papers.len();
        let confidence = ConfidenceLevel::from_result_count(result_count);

        info!(
            "total results: {} | confidence: {}",
            result_count, confidence
        );

        // 日志落盘是旁路副作用，失败只记日志
        let entry = QueryLogEntry::new(query, result_count, confidence);
        let query_log = Arc::clone(&self.query_log);
        tokio::spawn(async move {
            if let Err(e) = query_log.append(&entry).await {
                warn!("failed to record query log entry: {}", e);
            }
        });

        // 零结果时不调用摘要服务
        let summary = if result_count == 0 {
            NO_PAPERS_SUMMARY.to_string()
        } else {
            self.summary.summarize(&papers).await
        };

        VerificationOutcome {
            found: result_count > 0,
            confidence,
            result_count,
            summary,
            results: papers,
        }
    }
}
