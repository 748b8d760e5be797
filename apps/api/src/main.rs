mod config;
mod errors;
mod extraction;
mod interview;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::PdfTextExtractor;
use crate::interview::session::SessionStore;
use crate::llm_client::{GeminiClient, TextGenerator};
use crate::routes::build_router;
use crate::state::AppState;

/// How often idle sessions are swept in the background.
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview API v{}", env!("CARGO_PKG_VERSION"));

    let llm = build_llm_client(&config)?;

    let sessions = SessionStore::new(config.session_ttl);
    spawn_session_sweeper(sessions.clone());

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_origin
                .parse::<HeaderValue>()
                .with_context(|| format!("CORS_ORIGIN is not a valid origin: {}", config.cors_origin))?,
        )
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);
    info!("CORS allowed origin: {}", config.cors_origin);

    let state = AppState {
        llm,
        extractor: Arc::new(PdfTextExtractor),
        sessions,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the Gemini client, or `None` when no API key is configured.
fn build_llm_client(config: &Config) -> Result<Option<Arc<dyn TextGenerator>>> {
    let Some(api_key) = config.google_api_key.clone() else {
        error!("GOOGLE_API_KEY not set; question generation and evaluation will report the model as uninitialized");
        return Ok(None);
    };

    let client = GeminiClient::new(
        api_key,
        config.gemini_model.clone(),
        config.gemini_api_base.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    )
    .context("Failed to build Gemini HTTP client")?;

    info!(
        "LLM client initialized (model: {}, timeout: {}s)",
        client.model(),
        config.llm_timeout_secs
    );
    Ok(Some(Arc::new(client)))
}

fn spawn_session_sweeper(sessions: SessionStore) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            let purged = sessions.purge_expired().await;
            if purged > 0 {
                info!("Swept {purged} idle interview session(s)");
            }
        }
    });
}
