// Résumé profile extraction.
// Pure text processing over fixed tables; no LLM calls here.

pub mod extractor;
pub mod vocabulary;

use serde::{Deserialize, Serialize};

pub use extractor::extract;

/// Structured résumé summary produced by `extract`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Vocabulary order, deduplicated.
    pub skills: Vec<String>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    /// Never populated by extraction.
    pub projects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
}

impl Profile {
    pub fn experience_titles(&self) -> Vec<&str> {
        self.experience.iter().map(|e| e.title.as_str()).collect()
    }
}
