//! In-memory interview sessions keyed by the token issued at `/start-interview`.
//!
//! Sessions live until they sit idle longer than the configured TTL or the process
//! exits. Expired sessions are invisible to lookups and dropped on the next create.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::interview::evaluation::Feedback;

#[derive(Debug, Clone)]
pub struct InterviewSession {
    pub resume_text: String,
    pub jd_text: String,
    pub questions: Vec<String>,
    pub evaluations: Vec<EvaluationRecord>,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationRecord {
    pub question: String,
    pub feedback: Feedback,
    pub evaluated_at: DateTime<Utc>,
}

/// Document text needed to evaluate an answer.
#[derive(Debug, Clone)]
pub struct EvaluationContext {
    pub resume_text: String,
    pub jd_text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub questions: Vec<String>,
    pub evaluations: Vec<EvaluationRecord>,
    /// Mean of numeric scores, one decimal. Absent until something has been scored.
    pub overall_score: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, InterviewSession>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    fn is_expired(&self, session: &InterviewSession, now: DateTime<Utc>) -> bool {
        now - session.last_active > self.ttl
    }

    /// Stores a new session and returns its token.
    pub async fn create(&self, resume_text: String, jd_text: String, questions: Vec<String>) -> Uuid {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, s| !self.is_expired(s, now));
        let purged = before - sessions.len();
        if purged > 0 {
            info!("Purged {purged} expired interview session(s)");
        }

        sessions.insert(
            id,
            InterviewSession {
                resume_text,
                jd_text,
                questions,
                evaluations: Vec::new(),
                created_at: now,
                last_active: now,
            },
        );
        info!("Interview session {id} created ({} active)", sessions.len());
        id
    }

    /// Returns the documents for a live session and refreshes its idle timer.
    pub async fn context(&self, id: Uuid) -> Option<EvaluationContext> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).filter(|s| !self.is_expired(s, now))?;
        session.last_active = now;

        Some(EvaluationContext {
            resume_text: session.resume_text.clone(),
            jd_text: session.jd_text.clone(),
        })
    }

    /// Appends an evaluation. Returns false if the session is gone.
    pub async fn record_evaluation(&self, id: Uuid, question: String, feedback: Feedback) -> bool {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&id).filter(|s| !self.is_expired(s, now)) {
            Some(session) => {
                session.evaluations.push(EvaluationRecord {
                    question,
                    feedback,
                    evaluated_at: now,
                });
                session.last_active = now;
                true
            }
            None => false,
        }
    }

    pub async fn summary(&self, id: Uuid) -> Option<SessionSummary> {
        let now = Utc::now();
        let sessions = self.sessions.read().await;
        let session = sessions.get(&id).filter(|s| !self.is_expired(s, now))?;

        Some(SessionSummary {
            session_id: id,
            questions: session.questions.clone(),
            evaluations: session.evaluations.clone(),
            overall_score: overall_score(&session.evaluations),
            created_at: session.created_at,
        })
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    /// Drops every session idle longer than the TTL as of `now`.
    pub async fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !self.is_expired(s, now));
        before - sessions.len()
    }

    pub async fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now()).await
    }

    /// Number of sessions that have not yet expired, swept or not.
    pub async fn active_count(&self) -> usize {
        let now = Utc::now();
        self.sessions
            .read()
            .await
            .values()
            .filter(|s| !self.is_expired(s, now))
            .count()
    }
}

fn overall_score(evaluations: &[EvaluationRecord]) -> Option<f64> {
    let scores: Vec<f64> = evaluations
        .iter()
        .filter_map(|e| e.feedback.score())
        .collect();
    if scores.is_empty() {
        return None;
    }
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}
