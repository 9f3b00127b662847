//! Portfolio project ideas aimed at the candidate's gaps.

use serde::{Deserialize, Serialize};

use crate::coaching::prompts::{with_json_rule, PROJECTS_PROMPT_TEMPLATE, PROJECTS_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, join_limited, JSON_ARRAY_ONLY};
use crate::llm_client::{extract_json_list, CompletionOptions, LlmClient, ModelTier};
use crate::session::Session;

pub const DEFAULT_ROLE: &str = "Developer";

const OPTIONS: CompletionOptions = CompletionOptions {
    temperature: 0.7,
    max_tokens: 1500,
    tier: ModelTier::Smart,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectIdea {
    pub title: String,
    pub tagline: String,
    pub difficulty: String,
    pub time_to_build: String,
    pub tech_stack: Vec<String>,
    pub why_impressive: String,
    pub gap_it_closes: String,
    pub steps: Vec<String>,
    pub bonus_features: Vec<String>,
    pub github_readme_tip: String,
}

pub fn build_prompt(session: &Session) -> String {
    fill_template(
        PROJECTS_PROMPT_TEMPLATE,
        &[
            ("role", session.target_role_or(DEFAULT_ROLE)),
            ("skills", join_limited(session.skills(), 12).as_str()),
            ("gaps", session.gap_skills(5).join(", ").as_str()),
        ],
    )
}

pub fn parse_reply(raw: &str, session: &Session) -> Vec<ProjectIdea> {
    extract_json_list(raw).unwrap_or_else(|| vec![fallback_project(session)])
}

fn fallback_project(session: &Session) -> ProjectIdea {
    let role = session.target_role_or(DEFAULT_ROLE);
    let skills = session.skills();
    let tech_stack = if skills.is_empty() {
        vec!["Python".to_string(), "React".to_string()]
    } else {
        skills.iter().take(4).cloned().collect()
    };
    let gap_it_closes = session
        .gap
        .as_ref()
        .and_then(|g| g.missing_skills.first())
        .cloned()
        .unwrap_or_else(|| "key skills".to_string());

    ProjectIdea {
        title: format!("{role} Portfolio App"),
        tagline: "Showcase your skills".to_string(),
        difficulty: "Intermediate".to_string(),
        time_to_build: "3 weeks".to_string(),
        tech_stack,
        why_impressive: "Demonstrates your full skill set to employers".to_string(),
        gap_it_closes,
        steps: [
            "Plan architecture",
            "Build backend API",
            "Create frontend",
            "Add tests",
            "Deploy publicly",
        ]
        .map(String::from)
        .to_vec(),
        bonus_features: vec![
            "Add authentication".to_string(),
            "Write documentation".to_string(),
        ],
        github_readme_tip: "Include a live demo link and screenshots".to_string(),
    }
}

pub async fn generate_projects(
    llm: &LlmClient,
    session: &Session,
) -> Result<Vec<ProjectIdea>, AppError> {
    let system = with_json_rule(PROJECTS_SYSTEM, JSON_ARRAY_ONLY);
    let raw = llm.complete(&system, &build_prompt(session), OPTIONS).await?;
    Ok(parse_reply(&raw, session))
}
