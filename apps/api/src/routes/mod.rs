pub mod health;
pub mod index;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        .route("/start-interview", post(handlers::handle_start_interview))
        .route("/evaluate-answer", post(handlers::handle_evaluate_answer))
        .route(
            "/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_end_session),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
