//! One definition of a word character, shared by tokenization, the match
//! rule, and symbol-line deletion: regex `\w` (Unicode letters, marks, digits,
//! connector punctuation).

use regex::Regex;
use std::sync::LazyLock;

#[expect(clippy::expect_used, reason = "constant pattern")]
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Word characters other than `_`.
#[expect(clippy::expect_used, reason = "constant pattern")]
static CONTENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\W_]").expect("valid regex"));

/// Maximal word runs of `text`, in order.
pub fn words(text: &str) -> Vec<String> {
    WORD.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// True when `line` has a word character that is not an underscore.
pub fn has_content(line: &str) -> bool {
    CONTENT.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combining_marks_stay_inside_the_word() {
        assert_eq!(words("cafe\u{301} au lait"), ["cafe\u{301}", "au", "lait"]);
    }

    #[test]
    fn underscores_alone_are_not_content() {
        assert!(!has_content("___ -- !!"));
        assert!(has_content("__x__"));
        assert!(has_content("42"));
        assert!(has_content("\u{e9}t\u{e9}"));
    }
}
