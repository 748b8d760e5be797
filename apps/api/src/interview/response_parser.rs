//! Best-effort extraction of a JSON value embedded in free-form LLM output.
//!
//! No opening delimiter means `NoJsonFound`. Otherwise the primary strategy slices
//! from the first opening delimiter to the last closing delimiter and decodes
//! strictly. If that slice does not decode, fall back to the first syntactically
//! complete value of the requested kind (handles `[..] or alternatively [..]`).

use serde_json::{Deserializer, Map, Value};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("no JSON value found in response")]
    NoJsonFound,

    #[error("malformed JSON in response: {0}")]
    MalformedJson(String),
}

#[derive(Debug, Clone, Copy)]
enum JsonKind {
    Array,
    Object,
}

impl JsonKind {
    fn delimiters(self) -> (char, char) {
        match self {
            JsonKind::Array => ('[', ']'),
            JsonKind::Object => ('{', '}'),
        }
    }

    fn matches(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (JsonKind::Array, Value::Array(_)) | (JsonKind::Object, Value::Object(_))
        )
    }
}

/// Extracts the JSON array embedded in `raw`.
pub fn extract_json_array(raw: &str) -> Result<Vec<Value>, ParseError> {
    match extract_json(raw, JsonKind::Array)? {
        Value::Array(items) => Ok(items),
        other => Err(ParseError::MalformedJson(format!("expected array, got {other}"))),
    }
}

/// Extracts the JSON object embedded in `raw`.
pub fn extract_json_object(raw: &str) -> Result<Map<String, Value>, ParseError> {
    match extract_json(raw, JsonKind::Object)? {
        Value::Object(map) => Ok(map),
        other => Err(ParseError::MalformedJson(format!("expected object, got {other}"))),
    }
}

fn extract_json(raw: &str, kind: JsonKind) -> Result<Value, ParseError> {
    let (open, close) = kind.delimiters();

    let start = raw.find(open).ok_or(ParseError::NoJsonFound)?;

    // An opening delimiter without a usable close is a truncated or broken value.
    let primary = match raw.rfind(close) {
        None => Err(format!("no closing '{close}' after opening '{open}'")),
        Some(end) if end < start => {
            Err("closing delimiter precedes opening delimiter".to_string())
        }
        Some(end) => {
            let candidate = &raw[start..=end];
            debug!("Attempting to parse JSON: {candidate}");
            serde_json::from_str::<Value>(candidate).map_err(|e| e.to_string())
        }
    };

    match primary {
        Ok(value) => Ok(value),
        Err(reason) => first_complete_value(raw, kind).ok_or_else(|| {
            debug!("JSON decode failed: {reason}");
            ParseError::MalformedJson(reason)
        }),
    }
}

/// Returns the first value of `kind` that decodes cleanly from some opening delimiter.
fn first_complete_value(raw: &str, kind: JsonKind) -> Option<Value> {
    let (open, _) = kind.delimiters();

    raw.match_indices(open).find_map(|(idx, _)| {
        let mut stream = Deserializer::from_str(&raw[idx..]).into_iter::<Value>();
        match stream.next() {
            Some(Ok(value)) if kind.matches(&value) => Some(value),
            _ => None,
        }
    })
}
