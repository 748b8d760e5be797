//! Axum route handlers for the interview flow.

use axum::{
    extract::{multipart::Field, rejection::JsonRejection, Multipart, Path, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::evaluation::{evaluate_answer, Feedback};
use crate::interview::questions::generate_questions;
use crate::interview::session::SessionSummary;
use crate::state::AppState;

pub const FILES_REQUIRED: &str = "Both resume and job description files are required.";
pub const EXTRACTION_FAILED: &str = "Could not extract text from one or both PDFs.";
pub const MISSING_EVALUATION_DATA: &str = "Missing data for evaluation.";
pub const INVALID_MULTIPART: &str = "Invalid multipart request.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct StartInterviewResponse {
    pub session_id: Uuid,
    pub questions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateAnswerRequest {
    pub session_id: Option<Uuid>,
    pub question: Option<String>,
    pub answer: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EvaluateAnswerResponse {
    pub feedback: Feedback,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /start-interview
///
/// Multipart upload of `resume` and `job_description`. Extracts both documents,
/// generates questions, and opens a session for later evaluations.
pub async fn handle_start_interview(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<StartInterviewResponse>, AppError> {
    info!("--- Received request for /start-interview ---");

    let mut resume: Option<Bytes> = None;
    let mut job_description: Option<Bytes> = None;

    while let Some(field) = multipart.next_field().await.map_err(invalid_multipart)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("resume") => resume = Some(read_field(field).await?),
            Some("job_description") => job_description = Some(read_field(field).await?),
            _ => {}
        }
    }

    let (Some(resume), Some(job_description)) = (resume, job_description) else {
        return Err(AppError::Validation(FILES_REQUIRED.to_string()));
    };

    let extractor = state.extractor.clone();
    let (resume_text, jd_text) = tokio::task::spawn_blocking(move || {
        (extractor.extract(&resume), extractor.extract(&job_description))
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))?;

    if resume_text.is_empty() || jd_text.is_empty() {
        return Err(AppError::Extraction(EXTRACTION_FAILED.to_string()));
    }

    let questions = match generate_questions(state.llm.as_deref(), &resume_text, &jd_text).await {
        Ok(questions) => questions,
        Err(e) if state.config.fail_soft => e.question_placeholder(),
        Err(e) => return Err(AppError::Llm(e)),
    };

    let session_id = state
        .sessions
        .create(resume_text, jd_text, questions.clone())
        .await;

    Ok(Json(StartInterviewResponse {
        session_id,
        questions,
    }))
}

/// POST /evaluate-answer
///
/// Scores one answer against the documents stored for `session_id`.
///
/// `session_id` is required: clients must echo the token returned by
/// `/start-interview`. A body with only `question` and `answer` is rejected with
/// 400 "Missing data for evaluation.", as is an unknown or expired token.
pub async fn handle_evaluate_answer(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateAnswerRequest>, JsonRejection>,
) -> Result<Json<EvaluateAnswerResponse>, AppError> {
    info!("--- Received request for /evaluate-answer ---");

    let Json(request) = payload.map_err(|e| {
        warn!("Rejected evaluation body: {e}");
        missing_data()
    })?;

    let question = non_blank(request.question).ok_or_else(missing_data)?;
    let answer = non_blank(request.answer).ok_or_else(missing_data)?;
    let session_id = request.session_id.ok_or_else(missing_data)?;

    let context = state
        .sessions
        .context(session_id)
        .await
        .ok_or_else(missing_data)?;

    let feedback = match evaluate_answer(
        state.llm.as_deref(),
        &context.resume_text,
        &context.jd_text,
        &question,
        &answer,
    )
    .await
    {
        Ok(feedback) => {
            let recorded = state
                .sessions
                .record_evaluation(session_id, question, feedback.clone())
                .await;
            if !recorded {
                warn!("Session {session_id} ended before its evaluation could be recorded");
            }
            feedback
        }
        Err(e) if state.config.fail_soft => e.feedback_placeholder(),
        Err(e) => return Err(AppError::Llm(e)),
    };

    Ok(Json(EvaluateAnswerResponse { feedback }))
}

/// GET /sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionSummary>, AppError> {
    state
        .sessions
        .summary(session_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))
}

/// DELETE /sessions/:id
pub async fn handle_end_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(session_id).await {
        info!("Interview session {session_id} ended");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {session_id} not found")))
    }
}

async fn read_field(field: Field<'_>) -> Result<Bytes, AppError> {
    field.bytes().await.map_err(invalid_multipart)
}

fn invalid_multipart(e: axum::extract::multipart::MultipartError) -> AppError {
    warn!("Could not read multipart body: {e}");
    AppError::Validation(INVALID_MULTIPART.to_string())
}

fn missing_data() -> AppError {
    AppError::Validation(MISSING_EVALUATION_DATA.to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
