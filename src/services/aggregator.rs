//! 结果聚合服务
//!
//! 按 70/30 配额并发调用主备两个检索源，主源结果优先，
//! 备源结果按标题去重后追加，最后截断到请求总量。

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::models::Paper;
use crate::providers::PaperSource;

/// 主源配额占比（百分比，向下取整）
const PRIMARY_SHARE_PERCENT: usize = 70;

/// 结果聚合器
pub struct ResultAggregator {
    primary: Arc<dyn PaperSource>,
    secondary: Arc<dyn PaperSource>,
}

/// 将总配额拆分为（主源配额, 备源配额）
pub fn split_quota(total_limit: usize) -> (usize, usize) {
    let primary = total_limit * PRIMARY_SHARE_PERCENT / 100;
    (primary, total_limit - primary)
}

impl ResultAggregator {
    /// 创建聚合器
    pub fn new(primary: Arc<dyn PaperSource>, secondary: Arc<dyn PaperSource>) -> Self {
        Self { primary, secondary }
    }

    /// 聚合两个检索源的结果，长度不超过 total_limit
    ///
    /// 去重按标题小写精确匹配，不做空白和标点归一化；
    /// 标点不同的近似重复标题会同时保留。
    pub async fn aggregate(&self, query: &str, total_limit: usize) -> Vec<Paper> {
        let (primary_limit, secondary_limit) = split_quota(total_limit);

        // 两个调用互不依赖，可以并发执行
        let (mut papers, secondary_papers) = tokio::join!(
            self.primary.search(query, primary_limit),
            self.secondary.search(query, secondary_limit),
        );

        // 去重集合基于主源标题构建一次，主源永远胜出
        let primary_titles: HashSet<String> =
            papers.iter().map(|p| p.title.to_lowercase()).collect();

        for paper in secondary_papers {
            if !primary_titles.contains(&paper.title.to_lowercase()) {
                papers.push(paper);
            }
        }

        papers.truncate(total_limit);

        debug!(
            "aggregated {} papers for query '{}' (limit {})",
            papers.len(),
            query,
            total_limit
        );

        papers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaperYear;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// 记录收到的 limit 并返回固定结果的桩检索源
    struct StubSource {
        papers: Vec<Paper>,
        seen_limit: Mutex<Option<usize>>,
    }

    impl StubSource {
        fn new(papers: Vec<Paper>) -> Arc<Self> {
            Arc::new(Self {
                papers,
                seen_limit: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl PaperSource for StubSource {
        async fn search(&self, _query: &str, limit: usize) -> Vec<Paper> {
            *self.seen_limit.lock().unwrap() = Some(limit);
            self.papers.clone()
        }

        fn name(&self) -> &'static str {
            "stub"
        }
    }

    fn paper(title: &str) -> Paper {
        Paper {
            title: title.to_string(),
            url: format!("https://example.org/{}", title),
            year: PaperYear::Known(2020),
            abstract_text: "abstract".to_string(),
        }
    }

    #[test]
    fn test_split_quota_is_70_30() {
        assert_eq!(split_quota(20), (14, 6));
        assert_eq!(split_quota(10), (7, 3));
        assert_eq!(split_quota(1), (0, 1));
        assert_eq!(split_quota(0), (0, 0));
    }

    #[tokio::test]
    async fn test_adapters_receive_their_quotas() {
        let primary = StubSource::new(vec![]);
        let secondary = StubSource::new(vec![]);
        let aggregator = ResultAggregator::new(primary.clone(), secondary.clone());

        aggregator.aggregate("q", 20).await;

        assert_eq!(*primary.seen_limit.lock().unwrap(), Some(14));
        assert_eq!(*secondary.seen_limit.lock().unwrap(), Some(6));
    }

    #[tokio::test]
    async fn test_primary_results_come_first() {
        let primary = StubSource::new(vec![paper("A"), paper("B")]);
        let secondary = StubSource::new(vec![paper("C")]);
        let aggregator = ResultAggregator::new(primary, secondary);

        let papers = aggregator.aggregate("q", 20).await;
        let titles: Vec<&str> = papers.iter().map(|p| p.title.as_str()).collect();

        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_case_insensitive_dedup_keeps_primary() {
        let primary = StubSource::new(vec![paper("Effects of X")]);
        let secondary = StubSource::new(vec![paper("EFFECTS OF X"), paper("Other")]);
        let aggregator = ResultAggregator::new(primary, secondary);

        let papers = aggregator.aggregate("q", 20).await;

        assert_eq!(papers.len(), 2);
        assert_eq!(papers[0].title, "Effects of X");
        assert_eq!(papers[1].title, "Other");
        assert_eq!(papers[0].url, "https://example.org/Effects of X");
    }

    #[tokio::test]
    async fn test_result_never_exceeds_total_limit() {
        let primary = StubSource::new((0..8).map(|i| paper(&format!("P{}", i))).collect());
        let secondary = StubSource::new((0..8).map(|i| paper(&format!("S{}", i))).collect());
        let aggregator = ResultAggregator::new(primary, secondary);

        let papers = aggregator.aggregate("q", 10).await;

        assert_eq!(papers.len(), 10);
    }

    #[tokio::test]
    async fn test_both_empty_yields_empty() {
        let aggregator = ResultAggregator::new(StubSource::new(vec![]), StubSource::new(vec![]));

        assert!(aggregator.aggregate("q", 20).await.is_empty());
    }
}
