//! 服务模块

pub mod aggregator;
pub mod assistant;
pub mod session_store;
pub mod summary;
pub mod verification;

pub use aggregator::{ResultAggregator, split_quota};
pub use assistant::{Assistant, FALLBACK_REPLY};
pub use session_store::{InMemorySessionStore, SessionStore};
pub use summary::{EMPTY_INPUT_SUMMARY, FALLBACK_SUMMARY, NO_PAPERS_SUMMARY, SummaryGenerator};
pub use verification::{VerificationOutcome, VerificationService};
