// Shared prompt fragments and the template renderer.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Appended to prompts whose answer is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "Do not add any introductory text, explanations, \
    or closing remarks.";

/// Keeps feedback readable when rendered as plain text.
pub const NO_MARKDOWN_INSTRUCTION: &str =
    "Do not use any markdown formatting (like asterisks).";

/// Replaces `{name}` placeholders in a single left-to-right pass.
///
/// Substituted values are never scanned again, so user text that happens to contain
/// `{answer}` stays literal. Braces that do not name a known placeholder are kept.
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(
        template.len() + vars.iter().map(|(_, v)| v.len()).sum::<usize>(),
    );
    let mut rest = template;

    while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];

        let matched = vars.iter().find_map(|(name, value)| {
            tail.strip_prefix(name)
                .and_then(|t| t.strip_prefix('}'))
                .map(|after| (*value, after))
        });

        match matched {
            Some((value, after)) => {
                out.push_str(value);
                rest = after;
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_known_placeholders() {
        let out = render_template("Q: {question} A: {answer}", &[("question", "Why?"), ("answer", "Because.")]);
        assert_eq!(out, "Q: Why? A: Because.");
    }

    #[test]
    fn test_render_keeps_unknown_braces() {
        let out = render_template(r#"{"score": 8} {name}"#, &[("name", "x")]);
        assert_eq!(out, r#"{"score": 8} x"#);
    }

    #[test]
    fn test_render_does_not_expand_substituted_values() {
        let out = render_template(
            "{resume_text} / {answer}",
            &[("resume_text", "I wrote {answer} here"), ("answer", "ok")],
        );
        assert_eq!(out, "I wrote {answer} here / ok");
    }

    #[test]
    fn test_render_handles_trailing_open_brace() {
        assert_eq!(render_template("end {", &[("a", "b")]), "end {");
    }
}
