use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::analysis::gap::{score, GapReport};
use crate::errors::AppError;
use crate::profile::{extract, Profile};
use crate::session::Preferences;
use crate::state::AppState;

/// Extracted text shorter than this is treated as an unreadable PDF.
const MIN_RESUME_CHARS: usize = 50;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub session_id: String,
    pub chars: usize,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub session_id: String,
    pub target_role: String,
    #[serde(default = "default_experience_level")]
    pub experience_level: String,
    #[serde(default)]
    pub career_field: Option<String>,
    #[serde(default)]
    pub job_types: Option<Vec<String>>,
    #[serde(default)]
    pub preferred_location: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub career_goal: Option<String>,
}

fn default_experience_level() -> String {
    "fresher".to_string()
}

impl AnalyzeRequest {
    fn preferences(&self) -> Preferences {
        Preferences {
            field: self.career_field.clone().unwrap_or_default(),
            job_types: self.job_types.clone().unwrap_or_default(),
            location: self.preferred_location.clone().unwrap_or_default(),
            salary: self.salary_range.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub session_id: String,
    pub profile: Profile,
    pub gap_analysis: GapReport,
}

/// POST /upload-resume
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        upload = Some((filename, data));
        break;
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::Validation("Missing 'file' field.".to_string()))?;
    if !filename.to_lowercase().ends_with(".pdf") {
        return Err(AppError::Validation("Only PDF files accepted.".to_string()));
    }

    let text = extract_pdf_text(data).await?;
    let chars = text.chars().count();
    let text = text.trim();
    if text.chars().count() < MIN_RESUME_CHARS {
        return Err(unreadable_pdf());
    }

    let session_id = state.sessions.create(text.to_string()).await;
    info!(%session_id, chars, "Résumé uploaded");
    Ok(Json(UploadResponse { session_id, chars }))
}

/// Runs pdf-extract on a blocking thread. Parser errors and parser panics both
/// surface as the same 422.
async fn extract_pdf_text(data: Bytes) -> Result<String, AppError> {
    let joined =
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data)).await;
    match joined {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => {
            warn!("PDF text extraction failed: {e}");
            Err(unreadable_pdf())
        }
        Err(e) => {
            warn!("PDF text extraction aborted: {e}");
            Err(unreadable_pdf())
        }
    }
}

fn unreadable_pdf() -> AppError {
    AppError::UnprocessableEntity("Could not extract text from PDF.".to_string())
}

/// POST /analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let session = state
        .sessions
        .get(&req.session_id)
        .await
        .ok_or_else(AppError::session_not_found)?;

    let profile = extract(&session.resume_text);
    let gap = score(&profile, &req.target_role, &req.experience_level);
    info!(
        session_id = %req.session_id,
        role = %req.target_role,
        match_score = gap.match_score,
        gaps = gap.gaps.len(),
        "Gap analysis complete"
    );

    let preferences = req.preferences();
    let stored = (profile.clone(), gap.clone());
    state
        .sessions
        .update(&req.session_id, move |s| {
            s.profile = Some(stored.0);
            s.gap = Some(stored.1);
            s.target_role = Some(req.target_role);
            s.career_goal = req.career_goal.unwrap_or_default();
            s.preferences = preferences;
        })
        .await
        .ok_or_else(AppError::session_not_found)?;

    Ok(Json(AnalyzeResponse {
        session_id: req.session_id,
        profile,
        gap_analysis: gap,
    }))
}

/// GET /session/:sid
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(sid): Path<String>,
) -> Result<Json<Value>, AppError> {
    let session = state
        .sessions
        .get(&sid)
        .await
        .ok_or_else(AppError::session_not_found)?;

    // Not-yet-analyzed sessions report empty objects rather than nulls.
    let profile = session
        .profile
        .map(serde_json::to_value)
        .transpose()
        .map_err(anyhow::Error::from)?
        .unwrap_or_else(|| json!({}));
    let gap = session
        .gap
        .map(serde_json::to_value)
        .transpose()
        .map_err(anyhow::Error::from)?
        .unwrap_or_else(|| json!({}));

    Ok(Json(json!({
        "profile": profile,
        "gap": gap,
        "target_role": session.target_role.unwrap_or_default(),
    })))
}

/// DELETE /session/:sid
pub async fn handle_clear_session(
    State(state): State<AppState>,
    Path(sid): Path<String>,
) -> Json<Value> {
    if state.sessions.remove(&sid).await {
        info!(session_id = %sid, "Session cleared");
    }
    Json(json!({ "message": "Cleared." }))
}
