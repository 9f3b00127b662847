//! Interview practice: tailored questions and graded answers.

use serde::{Deserialize, Serialize};

use crate::coaching::prompts::{
    with_json_rule, EVALUATE_PROMPT_TEMPLATE, EVALUATE_SYSTEM, QUESTIONS_PROMPT_TEMPLATE,
    QUESTIONS_SYSTEM,
};
use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, join_limited, JSON_ARRAY_ONLY, JSON_OBJECT_ONLY};
use crate::llm_client::{
    de_rounded_u32, extract_json_list, extract_json_object, CompletionOptions, LlmClient,
    ModelTier,
};
use crate::profile::extractor::PLACEHOLDER_NAME;
use crate::session::Session;

pub const DEFAULT_ROLE: &str = "Software Engineer";

const QUESTION_OPTIONS: CompletionOptions = CompletionOptions {
    temperature: 0.5,
    max_tokens: 1000,
    tier: ModelTier::Smart,
};

const EVALUATE_OPTIONS: CompletionOptions = CompletionOptions {
    temperature: 0.2,
    max_tokens: 800,
    tier: ModelTier::Fast,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewQuestion {
    #[serde(deserialize_with = "de_rounded_u32")]
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
    pub question: String,
    pub what_they_test: String,
    pub good_answer_hints: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBreakdown {
    pub technical_accuracy: f64,
    pub communication: f64,
    pub depth: f64,
    pub structure: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerEvaluation {
    pub score: f64,
    pub score_breakdown: ScoreBreakdown,
    pub verdict: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub ideal_answer_summary: String,
    pub follow_up_question: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Questions
// ────────────────────────────────────────────────────────────────────────────

pub fn build_questions_prompt(session: &Session, count: u32) -> String {
    let profile = session.profile.as_ref();
    let name = profile
        .map(|p| p.name.as_str())
        .unwrap_or(PLACEHOLDER_NAME);
    let experience = profile
        .map(|p| p.experience_titles().join(", "))
        .unwrap_or_default();
    let count = count.to_string();
    fill_template(
        QUESTIONS_PROMPT_TEMPLATE,
        &[
            ("name", name),
            ("role", session.target_role_or(DEFAULT_ROLE)),
            ("skills", join_limited(session.skills(), 12).as_str()),
            ("gaps", session.gap_skills(4).join(", ").as_str()),
            ("experience", experience.as_str()),
            ("count", count.as_str()),
        ],
    )
}

/// Parses a question list; anything but a non-empty array yields one generic question.
pub fn parse_questions(raw: &str, role: &str) -> Vec<InterviewQuestion> {
    extract_json_list(raw).unwrap_or_else(|| {
        vec![InterviewQuestion {
            id: 1,
            kind: "technical".to_string(),
            difficulty: "medium".to_string(),
            question: format!(
                "Describe a challenging {role} project you built and the biggest technical obstacle you overcame."
            ),
            what_they_test: "Problem solving + communication".to_string(),
            good_answer_hints: vec![
                "Be specific".to_string(),
                "Mention trade-offs".to_string(),
                "Quantify impact".to_string(),
            ],
        }]
    })
}

pub async fn generate_questions(
    llm: &LlmClient,
    session: &Session,
    count: u32,
) -> Result<Vec<InterviewQuestion>, AppError> {
    let system = with_json_rule(QUESTIONS_SYSTEM, JSON_ARRAY_ONLY);
    let raw = llm
        .complete(&system, &build_questions_prompt(session, count), QUESTION_OPTIONS)
        .await?;
    Ok(parse_questions(&raw, session.target_role_or(DEFAULT_ROLE)))
}

// ────────────────────────────────────────────────────────────────────────────
// Evaluation
// ────────────────────────────────────────────────────────────────────────────

pub fn build_evaluation_prompt(session: &Session, question: &str, answer: &str) -> String {
    fill_template(
        EVALUATE_PROMPT_TEMPLATE,
        &[
            ("role", session.target_role_or(DEFAULT_ROLE)),
            ("skills", join_limited(session.skills(), 8).as_str()),
            ("question", question),
            ("answer", answer),
        ],
    )
}

pub fn parse_evaluation(raw: &str) -> AnswerEvaluation {
    extract_json_object(raw).unwrap_or_else(fallback_evaluation)
}

fn fallback_evaluation() -> AnswerEvaluation {
    AnswerEvaluation {
        score: 6.0,
        score_breakdown: ScoreBreakdown {
            technical_accuracy: 6.0,
            communication: 7.0,
            depth: 5.0,
            structure: 6.0,
        },
        verdict: "Decent Answer".to_string(),
        strengths: vec!["Showed understanding of the concept".to_string()],
        improvements: vec![
            "Add more specific examples".to_string(),
            "Mention trade-offs and alternatives".to_string(),
        ],
        ideal_answer_summary:
            "A strong answer includes specific technical details with real examples.".to_string(),
        follow_up_question: "Can you elaborate with a real project example?".to_string(),
    }
}

pub async fn evaluate_answer(
    llm: &LlmClient,
    session: &Session,
    question: &str,
    answer: &str,
) -> Result<AnswerEvaluation, AppError> {
    let system = with_json_rule(EVALUATE_SYSTEM, JSON_OBJECT_ONLY);
    let raw = llm
        .complete(
            &system,
            &build_evaluation_prompt(session, question, answer),
            EVALUATE_OPTIONS,
        )
        .await?;
    Ok(parse_evaluation(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::gap::score;
    use crate::profile::Profile;

    fn analyzed_session(role: &str) -> Session {
        let profile = Profile {
            name: "Ada Lovelace".to_string(),
            skills: vec!["Python".to_string(), "SQL".to_string()],
            ..Default::default()
        };
        let mut session = Session::new("text".to_string());
        session.gap = Some(score(&profile, role, "fresher"));
        session.profile = Some(profile);
        session.target_role = Some(role.to_string());
        session
    }

    #[test]
    fn test_parse_questions_array() {
        let raw = r#"```json
[{"id":1,"type":"behavioral","difficulty":"easy","question":"Tell me about a conflict.",
  "what_they_test":"Teamwork","good_answer_hints":["STAR"]},
 {"id":2,"question":"Explain indexes."}]
```"#;
        let questions = parse_questions(raw, "Data Scientist");
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].kind, "behavioral");
        assert_eq!(questions[1].question, "Explain indexes.");
        assert!(questions[1].good_answer_hints.is_empty());
    }

    #[test]
    fn test_parse_questions_object_falls_back() {
        let questions = parse_questions(r#"{"questions": []}"#, "ML Engineer");
        assert_eq!(questions.len(), 1);
        assert_eq!(
            questions[0].question,
            "Describe a challenging ML Engineer project you built and the biggest technical obstacle you overcame."
        );
        assert_eq!(questions[0].good_answer_hints.len(), 3);
    }

    #[test]
    fn test_question_type_serializes_as_type() {
        let value = serde_json::to_value(&parse_questions("nope", "X")[0]).unwrap();
        assert_eq!(value["type"], "technical");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_questions_prompt_uses_session_context() {
        let session = analyzed_session("Data Scientist");
        let prompt = build_questions_prompt(&session, 3);
        assert!(prompt.contains("Candidate: Ada Lovelace"));
        assert!(prompt.contains("Target Role: Data Scientist"));
        assert!(prompt.contains("Their Skills: Python, SQL"));
        assert!(prompt.contains("Their Gaps: pandas, numpy, scikit-learn, Statistics"));
        assert!(prompt.contains("Generate 3 questions."));
    }

    #[test]
    fn test_questions_prompt_defaults_before_analysis() {
        let prompt = build_questions_prompt(&Session::new("text".to_string()), 2);
        assert!(prompt.contains("Candidate: Candidate"));
        assert!(prompt.contains("Target Role: Software Engineer"));
    }

    #[test]
    fn test_parse_evaluation_json() {
        let raw = r#"{"score":9,"verdict":"Strong","score_breakdown":{"depth":9}}"#;
        let eval = parse_evaluation(raw);
        assert_eq!(eval.score, 9.0);
        assert_eq!(eval.score_breakdown.depth, 9.0);
        assert_eq!(eval.score_breakdown.communication, 0.0);
    }

    #[test]
    fn test_parse_evaluation_fallback() {
        let eval = parse_evaluation("The answer was fine.");
        assert_eq!(eval.score, 6.0);
        assert_eq!(eval.verdict, "Decent Answer");
        assert_eq!(eval.score_breakdown.communication, 7.0);
        assert_eq!(eval.improvements.len(), 2);
    }

    #[test]
    fn test_parse_evaluation_keeps_fractional_scores() {
        let raw = r#"{"score":7.5,"verdict":"Strong Answer",
            "score_breakdown":{"technical_accuracy":8,"communication":7.5,"depth":6.5,"structure":8},
            "strengths":["Clear structure"]}"#;
        let eval = parse_evaluation(raw);
        assert_eq!(eval.verdict, "Strong Answer");
        assert_eq!(eval.score, 7.5);
        assert_eq!(eval.score_breakdown.depth, 6.5);
        assert_eq!(eval.score_breakdown.technical_accuracy, 8.0);
        assert_eq!(eval.strengths, vec!["Clear structure"]);
    }

    #[test]
    fn test_parse_questions_accepts_float_ids() {
        let questions = parse_questions(r#"[{"id":2.0,"question":"Explain joins."}]"#, "X");
        assert_eq!(questions[0].id, 2);
        assert_eq!(questions[0].question, "Explain joins.");
    }

    #[test]
    fn test_evaluation_prompt_carries_question_and_answer() {
        let session = analyzed_session("Data Scientist");
        let prompt = build_evaluation_prompt(&session, "What is {role}?", "An answer");
        // User text containing placeholder syntax is left as-is.
        assert!(prompt.contains("Question: What is {role}?"));
        assert!(prompt.contains("Candidate's Answer: An answer"));
        assert!(prompt.contains("Role: Data Scientist"));
    }
}
