use std::sync::Arc;

use crate::services::assistant::Assistant;
use crate::services::verification::VerificationService;
use crate::storage::query_log_repository::QueryLogRepository;

/// Application state containing all shared services
#[derive(Clone)]
pub struct AppState {
    /// Verification orchestrator
    pub verification_service: Arc<VerificationService>,
    /// Conversational assistant
    pub assistant: Arc<Assistant>,
    /// Query log repository for the statistics view
    pub query_log: Arc<dyn QueryLogRepository>,
    /// Fixed paper limit per verification request
    pub paper_limit: usize,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("verification_service", &"Arc<VerificationService>")
            .field("assistant", &"Arc<Assistant>")
            .field("query_log", &"Arc<dyn QueryLogRepository>")
            .field("paper_limit", &self.paper_limit)
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(
        verification_service: VerificationService,
        assistant: Assistant,
        query_log: Arc<dyn QueryLogRepository>,
        paper_limit: usize,
    ) -> Self {
        Self {
            verification_service: Arc::new(verification_service),
            assistant: Arc::new(assistant),
            query_log,
            paper_limit,
        }
    }
}
