//! 查询日志仓库
//!
//! 只追加的查询日志，外加统计视图需要的 count 和最近 N 条读取。

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::QueryLogEntry;

/// 查询日志仓库抽象
#[async_trait]
pub trait QueryLogRepository: Send + Sync {
    /// 追加一条日志
    async fn append(&self, entry: &QueryLogEntry) -> Result<()>;

    /// 日志总数
    async fn count(&self) -> Result<i64>;

    /// 最近 limit 条日志，新的在前
    async fn recent(&self, limit: i64) -> Result<Vec<QueryLogEntry>>;
}

/// SQLite 实现
pub struct SqliteQueryLogRepository {
    pool: SqlitePool,
}

impl SqliteQueryLogRepository {
    /// 创建仓库
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QueryLogRepository for SqliteQueryLogRepository {
    async fn append(&self, entry: &QueryLogEntry) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO queries (query_text, result_count, confidence_level, timestamp)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&entry.query_text)
        .bind(entry.result_count)
        .bind(&entry.confidence_level)
        .bind(entry.timestamp)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn count(&self) -> Result<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM queries")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<QueryLogEntry>> {
        let entries = sqlx::query_as::<_, QueryLogEntry>(
            r#"
            SELECT id, query_text, result_count, confidence_level, timestamp
            FROM queries
            ORDER BY timestamp DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConfidenceLevel;
    use crate::storage::sqlite::init_schema;
    use sqlx::sqlite::SqlitePoolOptions;

    /// 单连接内存库，避免每个连接各拿一份空库
    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        init_schema(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_append_and_count() {
        let repo = SqliteQueryLogRepository::new(test_pool().await);

        assert_eq!(repo.count().await.unwrap(), 0);

        repo.append(&QueryLogEntry::new("q1", 2, ConfidenceLevel::WeakEvidence))
            .await
            .unwrap();
        repo.append(&QueryLogEntry::new("q2", 0, ConfidenceLevel::NotSupported))
            .await
            .unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_recent_is_newest_first_and_bounded() {
        let repo = SqliteQueryLogRepository::new(test_pool().await);

        for i in 0..12 {
            repo.append(&QueryLogEntry::new(
                &format!("q{}", i),
                i,
                ConfidenceLevel::from_result_count(i),
            ))
            .await
            .unwrap();
        }

        let recent = repo.recent(10).await.unwrap();

        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].query_text, "q11");
        assert_eq!(recent[9].query_text, "q2");
    }

    #[tokio::test]
    async fn test_entry_roundtrip_preserves_fields() {
        let repo = SqliteQueryLogRepository::new(test_pool().await);
        let entry = QueryLogEntry::new("does coffee help", 7, ConfidenceLevel::ModerateEvidence);

        repo.append(&entry).await.unwrap();
        let stored = repo.recent(1).await.unwrap();

        assert_eq!(stored[0].query_text, "does coffee help");
        assert_eq!(stored[0].result_count, 7);
        assert_eq!(stored[0].confidence_level, "Moderate Evidence");
    }
}
