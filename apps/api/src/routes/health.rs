use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and whether the LLM client is configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "interview-api",
        "model_ready": state.llm.is_some(),
        "model": state.llm.as_ref().map(|llm| llm.model().to_string()),
        "active_sessions": state.sessions.active_count().await,
    }))
}
