use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::interview::session::SessionStore;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key was configured; services then report the model as uninitialized.
    pub llm: Option<Arc<dyn TextGenerator>>,
    /// Pluggable document extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    pub sessions: SessionStore,
    pub config: Config,
}
