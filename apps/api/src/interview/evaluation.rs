//! Answer evaluation: prompt → LLM → JSON feedback object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, error, info};

use crate::interview::error::InterviewError;
use crate::interview::prompts::build_evaluation_prompt;
use crate::interview::response_parser::extract_json_object;
use crate::llm_client::TextGenerator;

/// Feedback object as decoded from the model.
///
/// Expected keys are `score` (0–10), `strength` and `improvement` (lists of strings),
/// but nothing is enforced: the decoded object is passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback(pub Map<String, Value>);

impl Feedback {
    pub fn error(message: &str) -> Self {
        let mut map = Map::new();
        map.insert("error".to_string(), Value::String(message.to_string()));
        Feedback(map)
    }

    /// Numeric `score`, if the model supplied one.
    pub fn score(&self) -> Option<f64> {
        self.0.get("score").and_then(Value::as_f64)
    }
}

/// Scores `answer` to `question` in the context of the candidate's resume and the JD.
pub async fn evaluate_answer(
    llm: Option<&dyn TextGenerator>,
    resume_text: &str,
    jd_text: &str,
    question: &str,
    answer: &str,
) -> Result<Feedback, InterviewError> {
    let llm = llm.ok_or(InterviewError::ModelUninitialized)?;

    info!("Evaluating answer for question: '{question}'");
    let prompt = build_evaluation_prompt(resume_text, jd_text, question, answer);

    let raw = llm.generate(&prompt).await.map_err(|e| {
        error!("Error during answer evaluation: {e}");
        InterviewError::from(e)
    })?;
    debug!("Raw LLM response for feedback: {raw}");

    let object = extract_json_object(&raw).map_err(|e| {
        error!("Could not decode feedback object: {e}");
        InterviewError::from(e)
    })?;

    Ok(Feedback(object))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::response_parser::ParseError;
    use crate::llm_client::testing::StubGenerator;
    use serde_json::json;

    #[tokio::test]
    async fn test_feedback_is_decoded_from_wrapped_reply() {
        let stub = StubGenerator::text(
            "```json\n{\"score\": 7, \"strength\": [\"You quantified impact.\"], \"improvement\": [\"Mention the team size.\"]}\n```",
        );
        let feedback = evaluate_answer(Some(&stub), "r", "j", "Q?", "A.")
            .await
            .unwrap();
        assert_eq!(feedback.score(), Some(7.0));
        assert_eq!(
            serde_json::to_value(&feedback).unwrap(),
            json!({
                "score": 7,
                "strength": ["You quantified impact."],
                "improvement": ["Mention the team size."]
            })
        );
    }

    #[tokio::test]
    async fn test_prompt_includes_question_and_answer() {
        let stub = StubGenerator::text(r#"{"score": 5, "strength": [], "improvement": []}"#);
        evaluate_answer(Some(&stub), "r", "j", "What is ownership?", "Move semantics.")
            .await
            .unwrap();
        let prompt = &stub.prompts()[0];
        assert!(prompt.contains("What is ownership?"));
        assert!(prompt.contains("Move semantics."));
    }

    #[tokio::test]
    async fn test_out_of_range_score_is_not_validated() {
        let stub = StubGenerator::text(r#"{"score": 14}"#);
        let feedback = evaluate_answer(Some(&stub), "r", "j", "q", "a").await.unwrap();
        assert_eq!(feedback.score(), Some(14.0));
    }

    #[tokio::test]
    async fn test_missing_model_is_reported() {
        let err = evaluate_answer(None, "r", "j", "q", "a").await.unwrap_err();
        assert!(matches!(err, InterviewError::ModelUninitialized));
    }

    #[tokio::test]
    async fn test_malformed_reply_is_parse_error() {
        let stub = StubGenerator::text("{ score: seven ");
        let err = evaluate_answer(Some(&stub), "r", "j", "q", "a").await.unwrap_err();
        assert!(matches!(
            err,
            InterviewError::Parse(ParseError::MalformedJson(_))
        ));
    }

    #[test]
    fn test_non_numeric_score_is_none() {
        let feedback = Feedback(
            json!({"score": "eight"})
                .as_object()
                .cloned()
                .unwrap(),
        );
        assert_eq!(feedback.score(), None);
    }
}
