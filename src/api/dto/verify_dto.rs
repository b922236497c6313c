//! 验证接口 DTO

use serde::{Deserialize, Serialize};

use crate::models::{ConfidenceLevel, Paper, PaperYear};
use crate::services::verification::VerificationOutcome;

/// 验证请求
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct VerifyRequest {
    /// 待验证的陈述
    pub statement: String,
}

/// 验证请求被拒绝时的响应（空白陈述）
#[derive(Debug, Serialize)]
pub struct VerifyErrorResponse {
    /// 错误消息
    pub error: String,
    /// 固定为 false
    pub found: bool,
}

/// 论文响应
#[derive(Debug, Serialize)]
pub struct PaperResponse {
    /// 论文标题
    pub title: String,
    /// 论文链接
    pub url: String,
    /// 发表年份（未知时为 "N/A"）
    pub year: PaperYear,
    /// 摘要
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

impl From<Paper> for PaperResponse {
    fn from(paper: Paper) -> Self {
        Self {
            title: paper.title,
            url: paper.url,
            year: paper.year,
            abstract_text: paper.abstract_text,
        }
    }
}

/// 验证响应
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    /// 是否找到支持论文
    pub found: bool,
    /// 置信度标签
    pub confidence: ConfidenceLevel,
    /// 结果数量
    pub result_count: usize,
    /// AI 综述或固定文案
    pub summary: String,
    /// 论文列表
    pub results: Vec<PaperResponse>,
}

impl From<VerificationOutcome> for VerifyResponse {
    fn from(outcome: VerificationOutcome) -> Self {
        Self {
            found: outcome.found,
            confidence: outcome.confidence,
            result_count: outcome.result_count,
            summary: outcome.summary,
            results: outcome.results.into_iter().map(PaperResponse::from).collect(),
        }
    }
}
