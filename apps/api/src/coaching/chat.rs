//! Mentor chat grounded in the session's profile and gap report.

use crate::coaching::prompts::CHAT_SYSTEM_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, join_limited, truncate_chars};
use crate::llm_client::{CompletionOptions, LlmClient, ModelTier};
use crate::session::{ChatRole, ChatTurn, Session};

const HISTORY_TURNS: usize = 6;
const HISTORY_TURN_CHARS: usize = 200;

const OPTIONS: CompletionOptions = CompletionOptions {
    temperature: 0.5,
    max_tokens: 400,
    tier: ModelTier::Fast,
};

pub fn build_system_prompt(session: &Session) -> String {
    let name = session
        .profile
        .as_ref()
        .map(|p| p.name.as_str())
        .unwrap_or("Student");
    let score = session
        .gap
        .as_ref()
        .map(|g| g.match_score.to_string())
        .unwrap_or_else(|| "?".to_string());
    let summary = session.gap.as_ref().map(|g| g.summary.as_str()).unwrap_or("");
    fill_template(
        CHAT_SYSTEM_TEMPLATE,
        &[
            ("name", name),
            ("role", session.target_role_or("")),
            ("skills", join_limited(session.skills(), 10).as_str()),
            ("gaps", session.gap_skills(4).join(", ").as_str()),
            ("score", score.as_str()),
            ("summary", summary),
        ],
    )
}

/// Prefixes the new message with the last few turns, each clipped.
pub fn build_user_message(history: &[ChatTurn], message: &str) -> String {
    let start = history.len().saturating_sub(HISTORY_TURNS);
    let transcript = history[start..]
        .iter()
        .map(|turn| {
            let speaker = match turn.role {
                ChatRole::User => "User",
                ChatRole::Assistant => "Assistant",
            };
            format!("{speaker}: {}", truncate_chars(&turn.content, HISTORY_TURN_CHARS))
        })
        .collect::<Vec<_>>()
        .join("\n");

    if transcript.is_empty() {
        message.to_string()
    } else {
        format!("{transcript}\nUser: {message}")
    }
}

pub fn fallback_reply(session: &Session) -> String {
    let skill = session
        .gap_skills(1)
        .first()
        .copied()
        .unwrap_or("required skills");
    format!("Focus on learning {skill} first. Start with a structured course this week.")
}

pub async fn reply(llm: &LlmClient, session: &Session, message: &str) -> Result<String, AppError> {
    let system = build_system_prompt(session);
    let user = build_user_message(&session.messages, message);
    let reply = llm.complete(&system, &user, OPTIONS).await?;
    if reply.is_empty() {
        return Ok(fallback_reply(session));
    }
    Ok(reply)
}
