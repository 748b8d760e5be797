// Interview coaching: question generation, answer evaluation, per-session state.
// All LLM calls go through llm_client; nothing here talks to Gemini directly.

pub mod error;
pub mod evaluation;
pub mod handlers;
pub mod prompts;
pub mod questions;
pub mod response_parser;
pub mod session;
