// In-memory session store.
// Memory-resident by design of the product: sessions are lost on restart.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::analysis::gap::GapReport;
use crate::coaching::interview::InterviewQuestion;
use crate::coaching::projects::ProjectIdea;
use crate::coaching::schedule::StudySchedule;
use crate::profile::Profile;

const SESSION_ID_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

/// Search preferences captured at `/analyze` time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub field: String,
    pub job_types: Vec<String>,
    pub location: String,
    pub salary: String,
}

/// Everything accumulated for one uploaded résumé.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub resume_text: String,
    pub messages: Vec<ChatTurn>,
    pub profile: Option<Profile>,
    pub gap: Option<GapReport>,
    pub target_role: Option<String>,
    pub career_goal: String,
    pub preferences: Preferences,
    pub current_questions: Vec<InterviewQuestion>,
    pub projects: Vec<ProjectIdea>,
    pub schedule: Option<StudySchedule>,
}

impl Session {
    pub fn new(resume_text: String) -> Self {
        Self {
            resume_text,
            ..Default::default()
        }
    }

    /// Stored target role, or `default` before `/analyze` has run.
    pub fn target_role_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.target_role.as_deref().unwrap_or(default)
    }

    pub fn skills(&self) -> &[String] {
        self.profile.as_ref().map(|p| p.skills.as_slice()).unwrap_or(&[])
    }

    pub fn gap_skills(&self, limit: usize) -> Vec<&str> {
        self.gap.as_ref().map(|g| g.gap_skills(limit)).unwrap_or_default()
    }
}

/// Shared map from session id to session state.
///
/// A single lock guards the whole map; concurrent writers to the same id are
/// last-write-wins.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a fresh session and returns its short id.
    pub async fn create(&self, resume_text: String) -> String {
        let mut sessions = self.inner.write().await;
        let id = loop {
            let candidate: String = Uuid::new_v4()
                .to_string()
                .chars()
                .take(SESSION_ID_LEN)
                .collect();
            if !sessions.contains_key(&candidate) {
                break candidate;
            }
        };
        sessions.insert(id.clone(), Session::new(resume_text));
        id
    }

    /// Snapshot of a session.
    pub async fn get(&self, id: &str) -> Option<Session> {
        self.inner.read().await.get(id).cloned()
    }

    /// Applies `f` to the session in place; `None` when the id is unknown.
    pub async fn update<R>(&self, id: &str, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        self.inner.write().await.get_mut(id).map(f)
    }

    pub async fn remove(&self, id: &str) -> bool {
        self.inner.write().await.remove(id).is_some()
    }
}

#[cfg(test)]
impl SessionStore {
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
