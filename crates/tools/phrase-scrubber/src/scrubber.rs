use regex::{Regex, RegexBuilder};

use crate::{error::ScrubError, normalize::normalize};

/// Gap allowed between two consecutive phrase tokens: one or more non-word characters.
const TOKEN_GAP: &str = r"[\s\W]+?";

/// Compiled size budget for the match rule. The default limit is too tight
/// for long phrases once every token is expanded for case-insensitivity.
const MATCH_RULE_SIZE_LIMIT: usize = 64 * (1 << 20);

/// A phrase compiled into a reusable fuzzy match rule.
///
/// Build once, scrub many texts:
///
/// ```
/// use phrase_scrubber::PhraseScrubber;
///
/// let scrubber = PhraseScrubber::new("Hello World").unwrap();
/// assert_eq!(scrubber.scrub("say HELLO   WORLD now"), "say  now");
/// ```
#[derive(Debug, Clone)]
pub struct PhraseScrubber {
    tokens: Vec<String>,
    rule: Option<Regex>,
}

/// Result of a scrub along with how many phrase occurrences were removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrubReport {
    pub text: String,
    pub removed: usize,
}

impl PhraseScrubber {
    /// Compiles `phrase` into a match rule.
    ///
    /// A phrase without word tokens compiles to a scrubber that leaves every
    /// text untouched.
    pub fn new(phrase: &str) -> Result<Self, ScrubError> {
        let tokens = tokenize(phrase);
        if tokens.is_empty() {
            return Ok(Self { tokens, rule: None });
        }

        let pattern = match_rule_pattern(&tokens);
        let rule = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .size_limit(MATCH_RULE_SIZE_LIMIT)
            .build()
            .map_err(|source| ScrubError::PatternTooLarge {
                tokens: tokens.len(),
                source,
            })?;

        tracing::debug!(tokens = tokens.len(), "compiled phrase match rule");
        Ok(Self {
            tokens,
            rule: Some(rule),
        })
    }

    /// Word tokens of the phrase, in order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// True when the phrase had no word tokens and scrubbing is a no-op.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.rule.is_none()
    }

    /// Removes every occurrence of the phrase and normalizes the result.
    #[must_use]
    pub fn scrub(&self, text: &str) -> String {
        self.scrub_with_report(text).text
    }

    /// Like [`Self::scrub`], also counting removed occurrences.
    #[must_use]
    pub fn scrub_with_report(&self, text: &str) -> ScrubReport {
        let Some(rule) = &self.rule else {
            return ScrubReport {
                text: text.to_string(),
                removed: 0,
            };
        };

        let mut stripped = String::with_capacity(text.len());
        let mut removed = 0usize;
        let mut last = 0usize;
        for m in rule.find_iter(text) {
            stripped.push_str(&text[last..m.start()]);
            last = m.end();
            removed += 1;
        }
        stripped.push_str(&text[last..]);

        ScrubReport {
            text: normalize(&stripped),
            removed,
        }
    }
}

/// Removes every fuzzy occurrence of `phrase` from `text`.
///
/// Never fails. A phrase without word tokens returns `text` unchanged; a
/// phrase too large to compile skips removal and only normalizes.
#[must_use]
pub fn scrub(text: &str, phrase: &str) -> String {
    match PhraseScrubber::new(phrase) {
        Ok(scrubber) => scrubber.scrub(text),
        Err(e) => {
            tracing::warn!("phrase removal skipped: {e}");
            normalize(text)
        }
    }
}

fn tokenize(phrase: &str) -> Vec<String> {
    crate::word::words(phrase)
}

fn match_rule_pattern(tokens: &[String]) -> String {
    let body = tokens
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join(TOKEN_GAP);
    format!(r"\b{body}\b")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::INJECTED_INTEGRITY_NOTICE;

    #[test]
    fn tokenize_drops_punctuation() {
        assert_eq!(
            tokenize("**Message to User:** \"To uphold"),
            vec!["Message", "to", "User", "To", "uphold"]
        );
        assert_eq!(tokenize("snake_case stays"), vec!["snake_case", "stays"]);
        assert!(tokenize("  ... !!! ").is_empty());
    }

    #[test]
    fn combining_mark_phrase_matches_itself() {
        let phrase = "cafe\u{301} menu";
        assert_eq!(tokenize(phrase), vec!["cafe\u{301}", "menu"]);
        assert_eq!(scrub("Open: CAFE\u{301}  menu today", phrase), "Open:  today");
    }

    #[test]
    fn pattern_joins_tokens_with_gap() {
        let p = match_rule_pattern(&["a.b".to_string(), "c".to_string()]);
        assert_eq!(p, r"\ba\.b[\s\W]+?c\b");
    }

    #[test]
    fn empty_phrase_is_noop() {
        let s = PhraseScrubber::new("").unwrap();
        assert!(s.is_noop());
        assert_eq!(s.scrub("  keep\n***\n\n\n\nme  "), "  keep\n***\n\n\n\nme  ");
        assert_eq!(scrub("x\n---\ny", "?!"), "x\n---\ny");
    }

    #[test]
    fn removes_both_occurrences() {
        let report = PhraseScrubber::new("hello world")
            .unwrap()
            .scrub_with_report("A hello world B hello, world C");
        assert_eq!(report.removed, 2);
        assert_eq!(report.text, "A  B  C");
    }

    #[test]
    fn match_spans_three_lines_with_irregular_spacing() {
        let text = "Before\nplease   feel\n\n  free ---\n\tto use me\nAfter";
        let out = scrub(text, "Please feel free to use me");
        assert_eq!(out, "Before\n\nAfter");
    }

    #[test]
    fn whitespace_tolerant_match() {
        let out = scrub("hello\n\n   world", "hello world");
        assert!(!out.contains("hello"));
        assert!(!out.contains("world"));
        assert_eq!(out, "");
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(scrub("HELLO   WORLD", "Hello World"), "");
    }

    #[test]
    fn requires_word_boundaries() {
        assert_eq!(scrub("othello worldly", "hello world"), "othello worldly");
        assert_eq!(scrub("hello worlds", "hello world"), "hello worlds");
    }

    #[test]
    fn requires_tokens_in_order() {
        assert_eq!(scrub("world hello", "hello world"), "world hello");
    }

    #[test]
    fn removal_leaves_no_separator() {
        assert_eq!(scrub("ab hello world cd", "hello world"), "ab  cd");
        assert_eq!(scrub("x:hello world:y", "hello world"), "x::y");
    }

    #[test]
    fn no_match_still_normalizes() {
        let report = PhraseScrubber::new("absent phrase")
            .unwrap()
            .scrub_with_report("\nA\n***\n\n\n\nB\n");
        assert_eq!(report.removed, 0);
        assert_eq!(report.text, "A\n\nB");
    }

    #[test]
    fn text_with_only_the_notice_becomes_empty() {
        assert_eq!(scrub(INJECTED_INTEGRITY_NOTICE, INJECTED_INTEGRITY_NOTICE), "");
    }

    #[test]
    fn notice_embedded_in_a_question() {
        let text = format!("Please answer: {INJECTED_INTEGRITY_NOTICE} What is 2+2?");
        let out = scrub(&text, INJECTED_INTEGRITY_NOTICE);
        // Deliberately not "Please answer: What is 2+2?": matches are replaced with "", so the period and both spaces remain.
        assert_eq!(out, "Please answer: . What is 2+2?");
        assert!(!out.contains("Coursera"));
    }

    #[test]
    fn rewrapped_notice_on_its_own_lines() {
        let rewrapped = INJECTED_INTEGRITY_NOTICE
            .replace(". ", ".\n\n")
            .replace("**", "")
            .to_uppercase();
        let text = format!("Question 1\n\n{rewrapped}\n\nWhich option is correct?\n(a) 4\n(b) 5");
        let out = scrub(&text, INJECTED_INTEGRITY_NOTICE);
        assert_eq!(out, "Question 1\n\nWhich option is correct?\n(a) 4\n(b) 5");
    }

    #[test]
    fn tokens_are_exposed() {
        let s = PhraseScrubber::new("Hi, there!").unwrap();
        assert_eq!(s.tokens(), ["Hi", "there"]);
    }
}
