use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::coaching::calendar::render_ics;
use crate::coaching::chat;
use crate::coaching::interview::{self, AnswerEvaluation, InterviewQuestion};
use crate::coaching::projects::{self, ProjectIdea};
use crate::coaching::schedule::{self, StudySchedule};
use crate::coaching::tailor::{self, TailorResult};
use crate::errors::AppError;
use crate::session::{ChatRole, ChatTurn, Session};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TailorRequest {
    pub session_id: String,
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct QuestionsRequest {
    pub session_id: String,
    #[serde(default = "default_num_questions")]
    pub num_questions: u32,
}

fn default_num_questions() -> u32 {
    3
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<InterviewQuestion>,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub session_id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    pub projects: Vec<ProjectIdea>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub schedule: StudySchedule,
    pub ics_download: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub model: String,
}

async fn load_session(state: &AppState, session_id: &str) -> Result<Session, AppError> {
    state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(AppError::session_not_found)
}

/// POST /tailor-resume
pub async fn handle_tailor_resume(
    State(state): State<AppState>,
    Json(req): Json<TailorRequest>,
) -> Result<Json<TailorResult>, AppError> {
    let session = load_session(&state, &req.session_id).await?;
    let result = tailor::tailor(&state.llm, &session, &req.job_description).await?;
    info!(
        session_id = %req.session_id,
        bullets = result.tailored_bullets.len(),
        "Résumé tailored"
    );
    Ok(Json(result))
}

/// POST /generate-questions
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(req): Json<QuestionsRequest>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let session = load_session(&state, &req.session_id).await?;
    let questions = interview::generate_questions(&state.llm, &session, req.num_questions).await?;
    let role = session.target_role_or(interview::DEFAULT_ROLE).to_string();

    let stored = questions.clone();
    state
        .sessions
        .update(&req.session_id, move |s| s.current_questions = stored)
        .await
        .ok_or_else(AppError::session_not_found)?;

    info!(session_id = %req.session_id, count = questions.len(), "Interview questions generated");
    Ok(Json(QuestionsResponse { questions, role }))
}

/// POST /evaluate-answer
pub async fn handle_evaluate_answer(
    State(state): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<AnswerEvaluation>, AppError> {
    let session = load_session(&state, &req.session_id).await?;
    let evaluation =
        interview::evaluate_answer(&state.llm, &session, &req.question, &req.answer).await?;
    info!(session_id = %req.session_id, score = evaluation.score, "Answer evaluated");
    Ok(Json(evaluation))
}

/// POST /generate-projects
pub async fn handle_generate_projects(
    State(state): State<AppState>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<ProjectsResponse>, AppError> {
    let session = load_session(&state, &req.session_id).await?;
    let projects = projects::generate_projects(&state.llm, &session).await?;

    let stored = projects.clone();
    state
        .sessions
        .update(&req.session_id, move |s| s.projects = stored)
        .await
        .ok_or_else(AppError::session_not_found)?;

    Ok(Json(ProjectsResponse { projects }))
}

/// POST /generate-schedule
pub async fn handle_generate_schedule(
    State(state): State<AppState>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<ScheduleResponse>, AppError> {
    let session = load_session(&state, &req.session_id).await?;
    let schedule = schedule::generate_schedule(&state.llm, &session).await?;
    let ics_download = render_ics(&schedule.weeks, Utc::now());

    let stored = schedule.clone();
    state
        .sessions
        .update(&req.session_id, move |s| s.schedule = Some(stored))
        .await
        .ok_or_else(AppError::session_not_found)?;

    info!(session_id = %req.session_id, weeks = schedule.weeks.len(), "Study schedule generated");
    Ok(Json(ScheduleResponse {
        schedule,
        ics_download,
    }))
}

/// POST /chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let session = load_session(&state, &req.session_id).await?;
    let reply = chat::reply(&state.llm, &session, &req.message).await?;

    let turns = [
        ChatTurn {
            role: ChatRole::User,
            content: req.message,
        },
        ChatTurn {
            role: ChatRole::Assistant,
            content: reply.clone(),
        },
    ];
    state
        .sessions
        .update(&req.session_id, move |s| s.messages.extend(turns))
        .await
        .ok_or_else(AppError::session_not_found)?;

    Ok(Json(ChatResponse {
        reply,
        model: state.llm.fast_model().to_string(),
    }))
}
