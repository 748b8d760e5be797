use thiserror::Error;

use crate::interview::evaluation::Feedback;
use crate::interview::response_parser::ParseError;
use crate::llm_client::LlmError;

/// Failure of a question-generation or answer-evaluation call.
///
/// The HTTP layer either renders this as a distinct status code or, in fail-soft
/// mode, folds it into a success-shaped placeholder via the helpers below.
#[derive(Debug, Error)]
pub enum InterviewError {
    #[error("LLM client is not initialized")]
    ModelUninitialized,

    #[error("LLM call failed: {0}")]
    Upstream(#[from] LlmError),

    #[error("Could not decode LLM response: {0}")]
    Parse(#[from] ParseError),
}

impl InterviewError {
    /// Single-element question list carrying a readable error message.
    pub fn question_placeholder(&self) -> Vec<String> {
        let message = match self {
            InterviewError::ModelUninitialized => {
                "Error: Gemini model not initialized. Check your API key."
            }
            InterviewError::Parse(ParseError::NoJsonFound) => {
                "Error: Could not find a valid list in the AI's response."
            }
            InterviewError::Parse(ParseError::MalformedJson(_)) => {
                "Error: The AI response was not in a valid JSON format."
            }
            InterviewError::Upstream(_) => {
                "Error: An exception occurred while generating questions."
            }
        };
        vec![message.to_string()]
    }

    /// `{"error": ...}` feedback object.
    pub fn feedback_placeholder(&self) -> Feedback {
        let message = match self {
            InterviewError::ModelUninitialized => "Gemini model not initialized.",
            InterviewError::Parse(ParseError::NoJsonFound) => {
                "Could not find a valid object in the AI's response."
            }
            InterviewError::Parse(ParseError::MalformedJson(_)) => {
                "The AI feedback was not in a valid JSON format."
            }
            InterviewError::Upstream(_) => "An exception occurred while evaluating the answer.",
        };
        Feedback::error(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_question_placeholders_are_single_error_strings() {
        let cases = [
            InterviewError::ModelUninitialized,
            InterviewError::Parse(ParseError::NoJsonFound),
            InterviewError::Parse(ParseError::MalformedJson("eof".into())),
            InterviewError::Upstream(LlmError::EmptyContent),
        ];
        for err in cases {
            let placeholder = err.question_placeholder();
            assert_eq!(placeholder.len(), 1);
            assert!(placeholder[0].starts_with("Error: "), "{placeholder:?}");
        }
    }

    #[test]
    fn test_uninitialized_question_placeholder_mentions_api_key() {
        assert_eq!(
            InterviewError::ModelUninitialized.question_placeholder(),
            vec!["Error: Gemini model not initialized. Check your API key.".to_string()]
        );
    }

    #[test]
    fn test_feedback_placeholder_has_error_key() {
        let feedback = InterviewError::Parse(ParseError::NoJsonFound).feedback_placeholder();
        assert_eq!(
            serde_json::to_value(&feedback).unwrap(),
            json!({"error": "Could not find a valid object in the AI's response."})
        );
    }
}
