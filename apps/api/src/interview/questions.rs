//! Question generation: prompt → LLM → JSON array of questions.

use serde_json::Value;
use tracing::{debug, error, info};

use crate::interview::error::InterviewError;
use crate::interview::prompts::build_questions_prompt;
use crate::interview::response_parser::extract_json_array;
use crate::llm_client::TextGenerator;

/// Asks the model for interview questions tailored to the resume and job description.
///
/// The question count is requested in the prompt but not checked here; callers get
/// whatever list the model returned.
pub async fn generate_questions(
    llm: Option<&dyn TextGenerator>,
    resume_text: &str,
    jd_text: &str,
) -> Result<Vec<String>, InterviewError> {
    let llm = llm.ok_or(InterviewError::ModelUninitialized)?;

    info!("Generating questions with {}", llm.model());
    let prompt = build_questions_prompt(resume_text, jd_text);

    let raw = llm.generate(&prompt).await.map_err(|e| {
        error!("Error during question generation: {e}");
        InterviewError::from(e)
    })?;
    debug!("Raw LLM response for questions: {raw}");

    let items = extract_json_array(&raw).map_err(|e| {
        error!("Could not decode question list: {e}");
        InterviewError::from(e)
    })?;

    Ok(items.into_iter().map(question_text).collect())
}

fn question_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
