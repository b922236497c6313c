//! Semantic Scholar 检索客户端（主源）

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::config::SearchProviderConfig;
use crate::error::Result;
use crate::models::Paper;
use crate::providers::{PaperSource, USER_AGENT};

/// 请求的响应字段
const SEARCH_FIELDS: &str = "title,url,year,abstract,paperId";

/// Semantic Scholar API 客户端
pub struct SemanticScholarClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<PaperItem>,
}

#[derive(Debug, Deserialize)]
struct PaperItem {
    title: Option<String>,
    url: Option<String>,
    year: Option<i32>,
    #[serde(rename = "abstract")]
    abstract_text: Option<String>,
    #[serde(rename = "paperId")]
    paper_id: Option<String>,
}

impl PaperItem {
    /// 归一化为统一的论文记录
    ///
    /// url 缺失时用 paperId 合成落地页链接。
    fn into_paper(self) -> Paper {
        let url = self.url.unwrap_or_else(|| {
            format!(
                "https://www.semanticscholar.org/paper/{}",
                self.paper_id.unwrap_or_default()
            )
        });
        Paper::new(self.title, url, self.year, self.abstract_text)
    }
}

impl SemanticScholarClient {
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
            .get(format!("{}/graph/v1/paper/search", self.base_url))
            .query(&[
                ("query", query),
                ("limit", &limit.to_string()),
                ("fields", SEARCH_FIELDS),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(crate::error::AppError::Provider(format!(
                "Semantic Scholar returned status {}",
                response.status()
            )));
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.data.into_iter().map(PaperItem::into_paper).collect())
    }
}

#[async_trait]
impl PaperSource for SemanticScholarClient {
    async fn search(&self, query: &str, limit: usize) -> Vec<Paper> {
        match self.fetch(query, limit).await {
            Ok(papers) => {
                debug!("Semantic Scholar: found {} papers", papers.len());
                papers
            }
            Err(e) => {
                warn!("Semantic Scholar search failed: {}", e);
                Vec::new()
            }
        }
    }

    fn name(&self) -> &'static str {
        "semantic_scholar"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaperYear;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: String) -> SearchProviderConfig {
        SearchProviderConfig {
            base_url,
            timeout: 2,
        }
    }

    #[tokio::test]
    async fn test_search_parses_papers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/graph/v1/paper/search"))
            .and(query_param("query", "sleep"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    {
                        "title": "Sleep and Memory",
                        "url": "https://www.semanticscholar.org/paper/abc",
                        "year": 2020,
                        "abstract": "Sleep consolidates memory.",
                        "paperId": "abc"
                    }
                ]
            })))
            .mount(&server)
            .await;

        let client = SemanticScholarClient::new(&test_config(server.uri())).unwrap();
        let papers = client.search("sleep", 5).await;

        assert_eq!(papers.len(), 1);
        assert_eq!(papers[0].title, "Sleep and Memory");
        assert_eq!(papers[0].year, PaperYear::Known(2020));
    }

    #[tokio::test]
    async fn test_missing_url_is_synthesized_from_paper_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/graph/v1/paper/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"title": "T", "year": 2001, "paperId": "xyz"}]
            })))
            .mount(&server)
            .await;

        let client = SemanticScholarClient::new(&test_config(server.uri())).unwrap();
        let papers = client.search("q", 5).await;

        assert_eq!(papers[0].url, "https://www.semanticscholar.org/paper/xyz");
    }

    #[tokio::test]
    async fn test_non_success_status_yields_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/graph/v1/paper/search"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let client = SemanticScholarClient::new(&test_config(server.uri())).unwrap();
        assert!(client.search("q", 5).await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_yields_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/graph/v1/paper/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = SemanticScholarClient::new(&test_config(server.uri())).unwrap();
        assert!(client.search("q", 5).await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_provider_yields_empty() {
        // 端口无人监听
        let client =
            SemanticScholarClient::new(&test_config("http://127.0.0.1:9".to_string())).unwrap();
        assert!(client.search("q", 5).await.is_empty());
    }

    #[tokio::test]
    async fn test_long_abstract_is_truncated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/graph/v1/paper/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"title": "T", "abstract": "x".repeat(900), "paperId": "p"}]
            })))
            .mount(&server)
            .await;

        let client = SemanticScholarClient::new(&test_config(server.uri())).unwrap();
        let papers = client.search("q", 5).await;

        assert_eq!(papers[0].abstract_text.chars().count(), 500);
    }
}
