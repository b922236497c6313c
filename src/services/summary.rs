//! 摘要生成服务
//!
//! 把论文标题和摘要拼成一段 prompt 交给文本生成服务，
//! 任何失败都降级为固定的提示文案，不向上传播错误。

use std::sync::Arc;

use tracing::warn;

use crate::models::Paper;
use crate::providers::TextGenerator;

/// 验证流程在零结果时使用的固定文案（不会调用本服务）
pub const NO_PAPERS_SUMMARY: &str = "No research papers found to generate a summary.";

/// 论文列表为空时的固定文案
pub const EMPTY_INPUT_SUMMARY: &str = "No papers available to summarize.";

/// 文本生成失败时的固定降级文案
pub const FALLBACK_SUMMARY: &str = "AI summary unavailable due to text generation error.";

/// 摘要生成器
pub struct SummaryGenerator {
    generator: Arc<dyn TextGenerator>,
}

impl SummaryGenerator {
    /// 创建摘要生成器
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// 生成面向普通读者的 5-7 行综述，永不失败
    pub async fn summarize(&self, papers: &[Paper]) -> String {
        if papers.is_empty() {
            return EMPTY_INPUT_SUMMARY.to_string();
        }

        let prompt = build_prompt(papers);

        match self.generator.complete(&prompt).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!("summary generation failed: {}", e);
                FALLBACK_SUMMARY.to_string()
            }
        }
    }
}

/// 构造摘要 prompt
fn build_prompt(papers: &[Paper]) -> String {
    let mut content = String::new();
    for paper in papers {
        content.push_str(&format!(
            "Title: {}\nAbstract: {}\n\n",
            paper.title, paper.abstract_text
        ));
    }

    format!(
        "Summarize the following academic research papers into a clear,\n\
         concise 5-7 line explanation suitable for a general audience:\n\n\
         {}\n\
         Provide a coherent summary that highlights the main findings and consensus.",
        content
    )
}
