//! CrossRef 检索客户端（备源）
//!
//! CrossRef 的条目结构与主源不同：标题是数组，链接要从 DOI 合成，
//! 年份藏在嵌套的 published.date-parts 里，这里统一归一化。

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::config::SearchProviderConfig;
use crate::error::Result;
use crate::models::Paper;
use crate::providers::{PaperSource, USER_AGENT};

/// 请求的响应字段
const SELECT_FIELDS: &str = "title,DOI,published,abstract";

/// CrossRef API 客户端
pub struct CrossrefClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct WorksResponse {
    #[serde(default)]
    message: WorksMessage,
}

#[derive(Debug, Deserialize, Default)]
struct WorksMessage {
    #[serde(default)]
    items: Vec<WorkItem>,
}

#[derive(Debug, Deserialize)]
struct WorkItem {
    title: Option<Vec<String>>,
    #[serde(rename = "DOI")]
    doi: Option<String>,
    published: Option<PublishedDate>,
    #[serde(rename = "abstract")]
    abstract_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PublishedDate {
    #[serde(rename = "date-parts", default)]
    date_parts: Vec<Vec<Option<i32>>>,
}

impl WorkItem {
    fn into_paper(self) -> Paper {
        let title = self.title.and_then(|t| t.into_iter().next());
        let url = format!("https://doi.org/{}", self.doi.unwrap_or_default());
        let year = self
            .published
            .and_then(|p| p.date_parts.into_iter().next())
            .and_then(|parts| parts.into_iter().next())
            .flatten();
        Paper::new(title, url, year, self.abstract_text)
    }
}

impl CrossrefClient {
    /// 创建客户端，超时与根地址来自配置
    pub fn new(config: &SearchProviderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<Paper>> {
        let response = self
            .client
            .get(format!("{}/works", self.base_url))
            .query(&[
                ("query", query),
                ("rows", &limit.to_string()),
                ("select", SELECT_FIELDS),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(crate::error::AppError::Provider(format!(
                "CrossRef returned status {}",
                response.status()
            )));
        }

        let body: WorksResponse = response.json().await?;
        Ok(body
            .message
            .items
            .into_iter()
            .map(WorkItem::into_paper)
            .collect())
    }
}

#[async_trait]
impl PaperSource for CrossrefClient {
    async fn search(&self, query: &str, limit: usize) -> Vec<Paper> {
        match self.fetch(query, limit).await {
            Ok(papers) => {
                debug!("CrossRef: found {} papers", papers.len());
                papers
            }
            Err(e) => {
                warn!("CrossRef search failed: {}", e);
                Vec::new()
            }
        }
    }

    fn name(&self) -> &'static str {
        "crossref"
    }
}
