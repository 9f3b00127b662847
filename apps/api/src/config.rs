use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Optional integrations (Groq, Adzuna) stay disabled when their keys are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub groq_model: String,
    pub adzuna_app_id: Option<String>,
    pub adzuna_app_key: Option<String>,
    pub adzuna_country: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: optional_env("GROQ_API_KEY"),
            groq_model: std::env::var("GROQ_MODEL")
                .unwrap_or_else(|_| "llama3-8b-8192".to_string()),
            adzuna_app_id: optional_env("ADZUNA_APP_ID"),
            adzuna_app_key: optional_env("ADZUNA_APP_KEY"),
            adzuna_country: std::env::var("ADZUNA_COUNTRY").unwrap_or_else(|_| "in".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Adzuna credentials, only when both halves are present.
    pub fn adzuna_credentials(&self) -> Option<(&str, &str)> {
        match (&self.adzuna_app_id, &self.adzuna_app_key) {
            (Some(id), Some(key)) => Some((id.as_str(), key.as_str())),
            _ => None,
        }
    }
}

/// Reads an env var, treating empty or whitespace-only values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
impl Config {
    /// Offline configuration for handler tests: no LLM key, no Adzuna.
    pub fn for_tests() -> Self {
        Config {
            groq_api_key: None,
            groq_model: "llama3-8b-8192".to_string(),
            adzuna_app_id: None,
            adzuna_app_key: None,
            adzuna_country: "in".to_string(),
            port: 0,
            max_upload_bytes: 1024 * 1024,
            rust_log: "info".to_string(),
        }
    }
}
