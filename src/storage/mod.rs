//! 存储模块

pub mod query_log_repository;
pub mod sqlite;

pub use query_log_repository::{QueryLogRepository, SqliteQueryLogRepository};
