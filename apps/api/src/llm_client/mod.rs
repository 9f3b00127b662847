/// LLM Client: the single point of entry for all chat-completion calls.
///
/// ARCHITECTURAL RULE: No other module may call the Groq API directly.
/// All LLM interactions MUST go through this module.
///
/// Two model tiers: the fast model (configurable via GROQ_MODEL) for short
/// conversational calls, and a larger hardcoded model for structured generation.
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// Model used for `ModelTier::Smart` calls.
pub const MODEL_SMART: &str = "llama-3.3-70b-versatile";
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("GROQ_API_KEY is not configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },
}

/// Which model a call should run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    Fast,
    Smart,
}

/// Per-call sampling options.
#[derive(Debug, Clone, Copy)]
pub struct CompletionOptions {
    pub temperature: f32,
    pub max_tokens: u32,
    pub tier: ModelTier,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            temperature: 0.4,
            max_tokens: 1500,
            tier: ModelTier::Fast,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Chat-completion client shared by every coaching feature.
/// Holds no key when GROQ_API_KEY is unset; every call then fails with `NotConfigured`.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
    fast_model: String,
}

impl LlmClient {
    pub fn new(api_key: Option<String>, fast_model: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            api_key,
            fast_model,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// The fast model name, reported by `/health` and `/chat`.
    pub fn fast_model(&self) -> &str {
        &self.fast_model
    }

    fn model_for(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Fast => &self.fast_model,
            ModelTier::Smart => MODEL_SMART,
        }
    }

    /// Sends one system + user exchange and returns the trimmed reply text.
    /// Retries on 429, 5xx and transport errors with exponential backoff.
    pub async fn complete(
        &self,
        system: &str,
        user: &str,
        options: CompletionOptions,
    ) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::NotConfigured)?;

        let request_body = ChatRequest {
            model: self.model_for(options.tier),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(GROQ_API_URL)
                .bearer_auth(api_key)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let chat: ChatResponse = response.json().await?;

            if let Some(usage) = &chat.usage {
                debug!(
                    "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                    usage.prompt_tokens, usage.completion_tokens
                );
            }

            let text = chat
                .choices
                .into_iter()
                .next()
                .and_then(|c| c.message.content)
                .unwrap_or_default();

            return Ok(text.trim().to_string());
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

/// Leniently pulls a JSON value of type `T` out of model output.
///
/// Strips code fences, tries the whole text, then the widest bracketed span.
/// Returns `None` when nothing deserializes; callers substitute their own defaults.
pub fn extract_json<T: DeserializeOwned>(text: &str) -> Option<T> {
    let cleaned = strip_json_fences(text);

    if let Ok(value) = serde_json::from_str::<T>(&cleaned) {
        return Some(value);
    }

    let start = cleaned.find(['[', '{'])?;
    let end = cleaned.rfind([']', '}'])?;
    if end <= start {
        return None;
    }
    serde_json::from_str::<T>(&cleaned[start..=end]).ok()
}

/// Like `extract_json`, but an empty `{}` counts as nothing found.
pub fn extract_json_object<T: DeserializeOwned>(text: &str) -> Option<T> {
    let map = extract_json::<serde_json::Map<String, serde_json::Value>>(text)?;
    if map.is_empty() {
        return None;
    }
    serde_json::from_value(serde_json::Value::Object(map)).ok()
}

/// Like `extract_json`, but an empty `[]` counts as nothing found.
pub fn extract_json_list<T: DeserializeOwned>(text: &str) -> Option<Vec<T>> {
    extract_json::<Vec<T>>(text).filter(|items| !items.is_empty())
}

/// Deserializes a whole-number field from any JSON number, so `2.0` or `1.6`
/// from a model does not reject the surrounding reply.
pub fn de_rounded_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value.round().clamp(0.0, f64::from(u32::MAX)) as u32)
}

/// Removes every ```json and ``` marker from LLM output.
fn strip_json_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_extract_json_plain_object() {
        let v: Value = extract_json(r#"{"score": 7}"#).unwrap();
        assert_eq!(v["score"], 7);
    }

    #[test]
    fn test_extract_json_embedded_in_prose() {
        let raw = "Sure! Here is the result:\n[{\"id\": 1}, {\"id\": 2}]\nGood luck.";
        let v: Vec<Value> = extract_json(raw).unwrap();
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn test_extract_json_garbage_is_none() {
        assert!(extract_json::<Value>("no json here at all").is_none());
        assert!(extract_json::<Value>("} backwards {").is_none());
    }

    #[test]
    fn test_extract_json_shape_mismatch_is_none() {
        // An object where an array is expected must not coerce.
        assert!(extract_json::<Vec<Value>>(r#"{"id": 1}"#).is_none());
    }

    #[test]
    fn test_extract_json_object_rejects_empty_object() {
        assert!(extract_json_object::<Value>("{}").is_none());
        assert!(extract_json_object::<Value>("[1, 2]").is_none());
        let v: Value = extract_json_object("```json\n{\"a\": 1}\n```").unwrap();
        assert_eq!(v["a"], 1);
    }

    #[test]
    fn test_extract_json_list_rejects_empty_array() {
        assert!(extract_json_list::<Value>("[]").is_none());
        assert_eq!(extract_json_list::<Value>("[{}]").unwrap().len(), 1);
    }

    #[test]
    fn test_de_rounded_u32_accepts_any_number() {
        #[derive(Deserialize)]
        struct Numbered {
            #[serde(deserialize_with = "de_rounded_u32")]
            n: u32,
        }
        let parse = |raw: &str| serde_json::from_str::<Numbered>(raw).map(|v| v.n).ok();
        assert_eq!(parse(r#"{"n": 3}"#), Some(3));
        assert_eq!(parse(r#"{"n": 2.0}"#), Some(2));
        assert_eq!(parse(r#"{"n": 1.6}"#), Some(2));
        assert_eq!(parse(r#"{"n": -4}"#), Some(0));
        assert_eq!(parse(r#"{"n": "x"}"#), None);
    }

    #[tokio::test]
    async fn test_complete_without_key_is_not_configured() {
        let llm = LlmClient::new(None, "llama3-8b-8192".to_string()).unwrap();
        assert!(!llm.is_configured());
        let err = llm
            .complete("system", "user", CompletionOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::NotConfigured));
    }

    #[test]
    fn test_model_for_tier() {
        let llm = LlmClient::new(Some("k".into()), "fast-model".to_string()).unwrap();
        assert_eq!(llm.model_for(ModelTier::Fast), "fast-model");
        assert_eq!(llm.model_for(ModelTier::Smart), MODEL_SMART);
    }
}
