//! Prompt template rendering.

/// Placeholder replaced by the cleaned text.
pub const TEXT_PLACEHOLDER: &str = "{text}";

/// Default prompt sent to Gemini.
pub const DEFAULT_PROMPT_TEMPLATE: &str = "Answer this question clearly and concisely:\n\n{text}";

/// Render `template` for `text`.
///
/// Every `{text}` is replaced. A template without the placeholder gets the
/// text appended after a blank line so the question is never dropped.
///
/// ```
/// use copypaste_config::render_prompt;
///
/// assert_eq!(
///     render_prompt("Q: {text}", "What is 2+2?"),
///     "Q: What is 2+2?"
/// );
/// ```
#[must_use]
pub fn render_prompt(template: &str, text: &str) -> String {
    if template.contains(TEXT_PLACEHOLDER) {
        template.replace(TEXT_PLACEHOLDER, text)
    } else if template.trim().is_empty() {
        text.to_string()
    } else {
        format!("{}\n\n{text}", template.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_matches_shell_prompt() {
        assert_eq!(
            render_prompt(DEFAULT_PROMPT_TEMPLATE, "What is 2+2?"),
            "Answer this question clearly and concisely:\n\nWhat is 2+2?"
        );
    }

    #[test]
    fn text_is_not_reinterpreted() {
        assert_eq!(render_prompt("<{text}>", "{text}"), "<{text}>");
    }

    #[test]
    fn template_without_placeholder_appends_text() {
        assert_eq!(render_prompt("Be brief.\n", "Why?"), "Be brief.\n\nWhy?");
        assert_eq!(render_prompt("  ", "Why?"), "Why?");
    }
}
