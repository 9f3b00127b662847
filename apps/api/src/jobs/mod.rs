//! Job search: pluggable listing sources behind one trait.
//!
//! `AppState` carries the live source as `Option<Arc<dyn JobSource>>` (present only
//! when Adzuna credentials are configured) and always carries the mock board as
//! the fallback.

pub mod adzuna;
pub mod handlers;
pub mod mock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Score assumed when the session has no gap report yet.
pub const NEUTRAL_MATCH_SCORE: u32 = 70;

#[derive(Debug, Error)]
pub enum JobSearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Job board returned status {0}")]
    Status(u16),
}

/// What the candidate is looking for, drawn from the session.
#[derive(Debug, Clone)]
pub struct JobQuery {
    pub role: String,
    pub location: String,
    pub num_results: usize,
    /// The session's gap score, if analyzed.
    pub match_score: Option<u32>,
    pub top_skills: Vec<String>,
}

impl JobQuery {
    pub fn match_score_or_neutral(&self) -> u32 {
        self.match_score.unwrap_or(NEUTRAL_MATCH_SCORE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub logo: String,
    pub apply_url: String,
    pub posted: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "match")]
    pub match_percent: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills_matched: Option<Vec<String>>,
    pub source: String,
}

/// A source of job listings. Implement this to add a board without touching
/// the handler.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Short name reported to clients as `source`.
    fn name(&self) -> &'static str;

    async fn search(&self, query: &JobQuery) -> Result<Vec<JobListing>, JobSearchError>;
}
