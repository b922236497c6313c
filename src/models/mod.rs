//! 数据模型模块

pub mod chat;
pub mod confidence;
pub mod paper;
pub mod query_log;

pub use chat::ChatTurn;
pub use confidence::ConfidenceLevel;
pub use paper::{Paper, PaperYear};
pub use query_log::QueryLogEntry;
