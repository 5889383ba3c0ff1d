mod advisor;
mod assessment;
mod config;
mod errors;
mod feedback;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advisor::{CareerAdvisor, LlmCareerAdvisor};
use crate::assessment::catalog::CareerCatalog;
use crate::config::Config;
use crate::feedback::store::FeedbackStore;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Career catalog: file override or the built-in archetypes
    let catalog = match &config.career_catalog_path {
        Some(path) => CareerCatalog::load(path)?,
        None => CareerCatalog::builtin(),
    };
    info!("Career catalog ready ({} careers)", catalog.profiles().len());

    // AI advisor is optional; without a key the advisor routes answer 503
    let advisor: Option<Arc<dyn CareerAdvisor>> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), config.llm_timeout, config.llm_max_retries)?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(LlmCareerAdvisor::new(llm)))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; AI advisor features are disabled");
            None
        }
    };

    let feedback = Arc::new(FeedbackStore::new(config.feedback_file.clone()));
    match feedback.load_all().await {
        Ok(records) => info!(
            "Feedback store: {} ({} records)",
            feedback.path().display(),
            records.len()
        ),
        // Appends will keep failing with STORAGE_ERROR until the file is repaired
        Err(e) => warn!("Feedback store unusable: {e}"),
    }

    let state = AppState {
        config: config.clone(),
        catalog: Arc::new(catalog),
        advisor,
        feedback,
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
