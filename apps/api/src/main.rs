mod config;
mod documents;
mod errors;
mod interview;
mod jobs;
mod llm_client;
mod question_bank;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::interview::llm_collaborators::{
    LlmAnswerEvaluator, LlmQuestionGenerator, PdfResumeExtractor,
};
use crate::interview::{PipelineOrchestrator, ScoringPolicy, SessionLifecycleManager};
use crate::jobs::JobListingClient;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PrepCoach API v{}", env!("CARGO_PKG_VERSION"));

    let pipeline = build_pipeline(&config)?;
    let jobs = build_job_client(&config)?;

    let state = AppState {
        config: config.clone(),
        pipeline,
        sessions: SessionLifecycleManager::new(),
        jobs,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// The pipeline needs a model credential. Without one the service still starts
/// and the pipeline routes answer 503.
fn build_pipeline(config: &Config) -> Result<Option<Arc<PipelineOrchestrator>>> {
    let Some(api_key) = config.anthropic_api_key.clone() else {
        warn!("ANTHROPIC_API_KEY not set; resume and answer routes are disabled");
        return Ok(None);
    };

    let llm = LlmClient::new(api_key)?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let scoring = ScoringPolicy::default();
    info!("Scoring policy loaded ({} keyword rules)", scoring.rules().len());

    let pipeline = PipelineOrchestrator::new(
        Arc::new(PdfResumeExtractor::new(llm.clone())),
        Arc::new(LlmQuestionGenerator::new(llm.clone())),
        Arc::new(LlmAnswerEvaluator::new(llm)),
        Arc::new(scoring),
        Duration::from_secs(config.collaborator_timeout_secs),
    );
    Ok(Some(Arc::new(pipeline)))
}

fn build_job_client(config: &Config) -> Result<Option<JobListingClient>> {
    match (config.adzuna_app_id.clone(), config.adzuna_app_key.clone()) {
        (Some(app_id), Some(app_key)) => {
            let client =
                JobListingClient::new(config.job_listing_api_url.clone(), app_id, app_key)?;
            info!("Job listing client initialized ({})", config.job_listing_api_url);
            Ok(Some(client))
        }
        _ => {
            warn!("ADZUNA_APP_ID / ADZUNA_APP_KEY not set; job listing route is disabled");
            Ok(None)
        }
    }
}
