mod analysis;
mod coaching;
mod config;
mod errors;
mod jobs;
mod llm_client;
mod profile;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::adzuna::AdzunaJobBoard;
use crate::jobs::mock::MockJobBoard;
use crate::jobs::JobSource;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Coach API v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(config.groq_api_key.clone(), config.groq_model.clone())?;
    if llm.is_configured() {
        info!(
            "LLM client initialized (fast: {}, smart: {})",
            llm.fast_model(),
            llm_client::MODEL_SMART
        );
    } else {
        warn!("GROQ_API_KEY not set; coaching routes will return LLM_NOT_CONFIGURED");
    }

    // Live job board only when both Adzuna credentials are present
    let live_jobs: Option<Arc<dyn JobSource>> = match config.adzuna_credentials() {
        Some((app_id, app_key)) => {
            let board = AdzunaJobBoard::new(app_id, app_key, &config.adzuna_country)?;
            info!("Adzuna job board enabled (country: {})", config.adzuna_country);
            Some(Arc::new(board))
        }
        None => {
            info!("Adzuna credentials not set; job search uses the mock board");
            None
        }
    };

    let state = AppState {
        sessions: SessionStore::new(),
        llm,
        config: config.clone(),
        live_jobs,
        mock_jobs: MockJobBoard,
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
