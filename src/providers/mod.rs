//! 外部服务客户端模块
//!
//! 两个论文检索源（Semantic Scholar 主源、CrossRef 备源）和
//! 一个文本生成服务（Gemini）。检索源按契约永不失败：任何
//! 传输错误、非 2xx 状态或畸形响应都记录日志并返回空结果，
//! 调用方无需区分"无结果"和"服务不可达"。

pub mod crossref;
pub mod gemini;
pub mod semantic_scholar;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Paper;

/// 出站请求统一 User-Agent
pub const USER_AGENT: &str = "Information-Authenticator/1.0";

/// 论文检索源
#[async_trait]
pub trait PaperSource: Send + Sync {
    /// 检索论文，失败时返回空列表而不是错误
    async fn search(&self, query: &str, limit: usize) -> Vec<Paper>;

    /// 检索源名称（用于日志）
    fn name(&self) -> &'static str;
}

/// 文本生成服务
///
/// 单次 prompt-completion 调用，不做流式输出。内部重试与模型
/// 选择行为视为不透明，这里只暴露 complete 一个能力。
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// 根据 prompt 生成一段文本
    async fn complete(&self, prompt: &str) -> Result<String>;
}

pub use crossref::CrossrefClient;
pub use gemini::GeminiClient;
pub use semantic_scholar::SemanticScholarClient;
