// All LLM prompt templates for the interview module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{render_template, JSON_ONLY_INSTRUCTION, NO_MARKDOWN_INSTRUCTION};

/// Number of questions requested per interview. Not enforced on the response.
pub const QUESTION_COUNT: usize = 5;

/// Question generation prompt.
/// Replace: {count}, {json_only}, {jd_text}, {resume_text}
pub const QUESTIONS_PROMPT_TEMPLATE: &str = r#"As an expert HR manager, analyze the following resume and job description.
Generate {count} insightful interview questions designed to probe the candidate's suitability for the role.

Return your response ONLY as a single, valid JSON-formatted list of exactly {count} strings. {json_only} For example: ["Question 1?", "Question 2?"]

Job Description:
---
{jd_text}
---
Candidate's Resume:
---
{resume_text}
---"#;

/// Answer evaluation prompt.
/// Replace: {no_markdown}, {json_only}, {jd_text}, {resume_text}, {question}, {answer}
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"As a helpful and constructive interview coach, evaluate the following answer to an interview question.
Your feedback should be personalized and address the user directly as "you". Do not refer to them as "the candidate".
Base your evaluation on the user's resume and the provided job description.

Provide your feedback ONLY as a single, valid JSON object with three keys: "score" (an integer out of 10), "strength" (a list of strings), and "improvement" (a list of strings).
{no_markdown} {json_only}

Example of a good response format: {"score": 8, "strength": ["You clearly explained the technical details of the project."], "improvement": ["To make your answer stronger, try to connect it back to the specific requirements in the job description."]}

Job Description:
---
{jd_text}
---
Your Resume:
---
{resume_text}
---
Question:
{question}
---
Your Answer:
{answer}
---"#;

pub fn build_questions_prompt(resume_text: &str, jd_text: &str) -> String {
    let count = QUESTION_COUNT.to_string();
    render_template(
        QUESTIONS_PROMPT_TEMPLATE,
        &[
            ("count", count.as_str()),
            ("json_only", JSON_ONLY_INSTRUCTION),
            ("jd_text", jd_text),
            ("resume_text", resume_text),
        ],
    )
}

pub fn build_evaluation_prompt(
    resume_text: &str,
    jd_text: &str,
    question: &str,
    answer: &str,
) -> String {
    render_template(
        EVALUATION_PROMPT_TEMPLATE,
        &[
            ("no_markdown", NO_MARKDOWN_INSTRUCTION),
            ("json_only", JSON_ONLY_INSTRUCTION),
            ("jd_text", jd_text),
            ("resume_text", resume_text),
            ("question", question),
            ("answer", answer),
        ],
    )
}
