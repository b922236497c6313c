use authentica::api::{self, app_state::AppState};
use authentica::config::loader::ConfigLoader;
use authentica::observability::{ObservabilityState, create_observability_router};
use authentica::providers::{
    CrossrefClient, GeminiClient, PaperSource, SemanticScholarClient, TextGenerator,
};
use authentica::services::{
    Assistant, InMemorySessionStore, ResultAggregator, SummaryGenerator, VerificationService,
};
use authentica::storage::query_log_repository::{QueryLogRepository, SqliteQueryLogRepository};
use authentica::storage::sqlite;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Authentica...");

    let config = ConfigLoader::load()?;
    ConfigLoader::validate(&config)?;
    info!("Configuration loaded successfully");

    let db_pool = sqlite::connect(&config.database).await?;
    let query_log: Arc<dyn QueryLogRepository> = Arc::new(SqliteQueryLogRepository::new(db_pool));
    info!("Query log repository initialized");

    let primary: Arc<dyn PaperSource> =
        Arc::new(SemanticScholarClient::new(&config.providers.semantic_scholar)?);
    let secondary: Arc<dyn PaperSource> = Arc::new(CrossrefClient::new(&config.providers.crossref)?);
    let generator: Arc<dyn TextGenerator> = Arc::new(GeminiClient::new(&config.providers.gemini)?);
    info!(
        "Provider clients initialized (text generation model: {})",
        config.providers.gemini.model
    );

    let aggregator = ResultAggregator::new(primary, secondary);
    let summary = SummaryGenerator::new(generator.clone());
    let verification_service = VerificationService::new(aggregator, summary, query_log.clone());
    info!("Verification service initialized");

    let session_store = Arc::new(InMemorySessionStore::new());
    let assistant = Assistant::new(generator, session_store);
    info!("Assistant service initialized");

    let app_state = AppState::new(
        verification_service,
        assistant,
        query_log,
        config.verification.paper_limit,
    );
    info!("Application state created");

    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
    ));
    let api_router = api::create_router(app_state);
    let router = create_observability_router(observability_state).merge(api_router);
    info!("API router created");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
