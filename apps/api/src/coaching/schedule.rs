//! Four-week study plan built from the gap report.

use serde::{Deserialize, Serialize};

use crate::coaching::prompts::{with_json_rule, SCHEDULE_PROMPT_TEMPLATE, SCHEDULE_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, JSON_OBJECT_ONLY};
use crate::llm_client::{
    de_rounded_u32, extract_json_object, CompletionOptions, LlmClient, ModelTier,
};
use crate::session::Session;

pub const DEFAULT_ROLE: &str = "Developer";
const PLAN_WEEKS: usize = 4;
const MAX_FOCUS_SKILLS: usize = 4;

const OPTIONS: CompletionOptions = CompletionOptions {
    temperature: 0.4,
    max_tokens: 1500,
    tier: ModelTier::Smart,
};

/// `weeks` is the one field a model reply must carry to be accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySchedule {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub total_hours: f64,
    pub weeks: Vec<StudyWeek>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyWeek {
    #[serde(deserialize_with = "de_rounded_u32")]
    pub week: u32,
    pub theme: String,
    pub focus: String,
    pub daily_hours: f64,
    pub tasks: Vec<StudyTask>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Days from plan start; calendar export picks a default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_offset: Option<i64>,
    pub duration_hours: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Milestone {
    #[serde(deserialize_with = "de_rounded_u32")]
    pub week: u32,
    pub goal: String,
}

pub fn build_prompt(session: &Session) -> String {
    let courses = session
        .gap
        .as_ref()
        .map(|g| {
            g.courses
                .iter()
                .map(|c| c.title.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();
    fill_template(
        SCHEDULE_PROMPT_TEMPLATE,
        &[
            ("role", session.target_role_or(DEFAULT_ROLE)),
            ("skills", session.gap_skills(MAX_FOCUS_SKILLS).join(", ").as_str()),
            ("courses", courses.as_str()),
        ],
    )
}

pub fn parse_reply(raw: &str, session: &Session) -> StudySchedule {
    extract_json_object(raw).unwrap_or_else(|| {
        fallback_schedule(
            session.target_role_or(DEFAULT_ROLE),
            &session.gap_skills(MAX_FOCUS_SKILLS),
        )
    })
}

/// One study task per week, each focused on the next gap skill.
pub fn fallback_schedule(role: &str, gaps: &[&str]) -> StudySchedule {
    let weeks = (0..PLAN_WEEKS)
        .map(|i| {
            let gap = gaps.get(i).copied();
            StudyWeek {
                week: i as u32 + 1,
                theme: format!("Week {}", i + 1),
                focus: gap.unwrap_or("Practice").to_string(),
                daily_hours: 2.0,
                tasks: vec![StudyTask {
                    title: Some(format!("Study {}", gap.unwrap_or("core skills"))),
                    description: Some("Structured learning".to_string()),
                    day_offset: Some(i as i64 * 7 + 1),
                    duration_hours: 2.0,
                    kind: "course".to_string(),
                }],
            }
        })
        .collect();

    StudySchedule {
        title: format!("4-Week {role} Roadmap"),
        total_hours: 40.0,
        weeks,
        milestones: vec![
            Milestone {
                week: 2,
                goal: "Complete first course".to_string(),
            },
            Milestone {
                week: 4,
                goal: "Apply to 5 jobs".to_string(),
            },
        ],
    }
}

pub async fn generate_schedule(
    llm: &LlmClient,
    session: &Session,
) -> Result<StudySchedule, AppError> {
    let system = with_json_rule(SCHEDULE_SYSTEM, JSON_OBJECT_ONLY);
    let raw = llm.complete(&system, &build_prompt(session), OPTIONS).await?;
    Ok(parse_reply(&raw, session))
}
