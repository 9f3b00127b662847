use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Service banner.
pub async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": format!("Career Coach API v{} is live", env!("CARGO_PKG_VERSION")),
        "model": state.llm.fast_model(),
        "features": [
            "resume-analysis",
            "resume-tailoring",
            "interview-practice",
            "portfolio-projects",
            "study-schedule",
            "job-matching",
            "mentor-chat"
        ],
    }))
}

/// GET /health
/// Reports which optional integrations are configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "online",
        "groq_configured": state.llm.is_configured(),
        "model": state.llm.fast_model(),
        "adzuna_configured": state.live_jobs.is_some(),
    }))
}
