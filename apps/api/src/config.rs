use std::str::FromStr;

use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Application configuration loaded from environment variables.
/// Only the Gemini key affects model availability; everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absent key leaves the LLM uninitialized; requests then fail soft.
    pub google_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub llm_timeout_secs: u64,
    pub cors_origin: String,
    pub port: u16,
    pub rust_log: String,
    /// Idle time after which a session expires.
    pub session_ttl: chrono::Duration,
    pub max_upload_bytes: usize,
    pub fail_soft: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let google_api_key = lookup("GOOGLE_API_KEY").filter(|k| !k.trim().is_empty());

        let session_ttl_secs: u64 = parse_or(&lookup, "SESSION_TTL_SECS", 3600)?;
        let session_ttl = i64::try_from(session_ttl_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .with_context(|| {
                format!("Environment variable 'SESSION_TTL_SECS' is out of range: {session_ttl_secs}")
            })?;

        Ok(Config {
            google_api_key,
            gemini_model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_api_base: lookup("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            llm_timeout_secs: parse_or(&lookup, "LLM_TIMEOUT_SECS", 60)?,
            cors_origin: lookup("CORS_ORIGIN")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            port: parse_or(&lookup, "PORT", 5000)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            session_ttl,
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            fail_soft: parse_or(&lookup, "FAIL_SOFT_RESPONSES", true)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}
