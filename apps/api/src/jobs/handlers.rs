use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::jobs::{JobListing, JobQuery};
use crate::session::Session;
use crate::state::AppState;

const DEFAULT_ROLE: &str = "Software Engineer";
const DEFAULT_LOCATION: &str = "India";
const TOP_SKILLS: usize = 5;
const MOCK_TIP: &str = "Set ADZUNA_APP_ID + ADZUNA_APP_KEY in .env for live job data";

#[derive(Debug, Deserialize)]
pub struct FindJobsRequest {
    pub session_id: String,
    #[serde(default = "default_location")]
    pub location: Option<String>,
    #[serde(default = "default_num_results")]
    pub num_results: usize,
}

fn default_location() -> Option<String> {
    Some(DEFAULT_LOCATION.to_string())
}

fn default_num_results() -> usize {
    5
}

#[derive(Debug, Serialize)]
pub struct FindJobsResponse {
    pub jobs: Vec<JobListing>,
    pub source: &'static str,
    pub role: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<&'static str>,
}

/// Request location, then the stored preference, then the default.
fn resolve_location(requested: Option<&str>, session: &Session) -> String {
    [requested, Some(session.preferences.location.as_str())]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|loc| !loc.is_empty())
        .unwrap_or(DEFAULT_LOCATION)
        .to_string()
}

fn build_query(req: &FindJobsRequest, session: &Session) -> JobQuery {
    JobQuery {
        role: session.target_role_or(DEFAULT_ROLE).to_string(),
        location: resolve_location(req.location.as_deref(), session),
        num_results: req.num_results,
        match_score: session.gap.as_ref().map(|g| g.match_score),
        top_skills: session.skills().iter().take(TOP_SKILLS).cloned().collect(),
    }
}

/// POST /find-jobs
pub async fn handle_find_jobs(
    State(state): State<AppState>,
    Json(req): Json<FindJobsRequest>,
) -> Result<Json<FindJobsResponse>, AppError> {
    let session = state
        .sessions
        .get(&req.session_id)
        .await
        .ok_or_else(AppError::session_not_found)?;
    let query = build_query(&req, &session);

    if let Some(live) = &state.live_jobs {
        match live.search(&query).await {
            Ok(jobs) if !jobs.is_empty() => {
                info!(
                    source = live.name(),
                    count = jobs.len(),
                    role = %query.role,
                    "Live job search"
                );
                return Ok(Json(FindJobsResponse {
                    jobs,
                    source: live.name(),
                    role: query.role,
                    location: query.location,
                    tip: None,
                }));
            }
            Ok(_) => info!(
                source = live.name(),
                "Live job search returned nothing; using mock board"
            ),
            Err(e) => warn!(
                source = live.name(),
                "Live job search failed, using mock board: {e}"
            ),
        }
    }

    let jobs = state.mock_jobs.listings(&query);
    Ok(Json(FindJobsResponse {
        jobs,
        source: "mock",
        role: query.role,
        location: query.location,
        tip: Some(MOCK_TIP),
    }))
}
