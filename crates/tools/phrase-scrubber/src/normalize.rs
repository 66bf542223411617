//! Whitespace clean-up applied after phrase removal.
//!
//! The passes run in a fixed order: symbol-only lines are deleted, runs of
//! blank lines are capped, and the result is trimmed.

/// Deletes symbol-only lines, caps blank-line runs at one blank line, and trims.
///
/// ```
/// assert_eq!(phrase_scrubber::normalize("A\n***\nB"), "A\nB");
/// assert_eq!(phrase_scrubber::normalize("A\n\n\n\nB"), "A\n\nB");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let purged = purge_symbol_lines(text);
    collapse_blank_runs(&purged).trim().to_string()
}

/// Removes every non-empty line that has no word character other than `_`, together
/// with its line terminator. Empty lines (including a bare `\r` before `\n`)
/// are kept so the blank-line cap can see them.
#[must_use]
pub fn purge_symbol_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let body = line.strip_suffix('\n').unwrap_or(line);
        let body = body.strip_suffix('\r').unwrap_or(body);
        if !body.is_empty() && !crate::word::has_content(body) {
            continue;
        }
        out.push_str(line);
    }
    out
}

/// Rewrites every run of three or more `\n` as exactly two.
#[must_use]
pub fn collapse_blank_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0usize;
    for ch in text.chars() {
        if ch == '\n' {
            run += 1;
            if run <= 2 {
                out.push(ch);
            }
        } else {
            run = 0;
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_only_line_is_deleted_not_blanked() {
        assert_eq!(purge_symbol_lines("A\n***\nB"), "A\nB");
        assert_eq!(normalize("A\n***\nB"), "A\nB");
    }

    #[test]
    fn underscore_and_whitespace_lines_are_deleted() {
        assert_eq!(purge_symbol_lines("A\n___\n  \t \nB"), "A\nB");
    }

    #[test]
    fn digits_survive() {
        assert_eq!(normalize("---\n42\n---"), "42");
    }

    #[test]
    fn last_line_without_terminator_is_deleted() {
        assert_eq!(purge_symbol_lines("A\n..."), "A\n");
        assert_eq!(normalize("A\n..."), "A");
    }

    #[test]
    fn empty_lines_are_kept_for_the_cap() {
        assert_eq!(purge_symbol_lines("A\n\nB"), "A\n\nB");
        assert_eq!(purge_symbol_lines("A\r\n\r\nB"), "A\r\n\r\nB");
    }

    #[test]
    fn four_newlines_collapse_to_two() {
        assert_eq!(collapse_blank_runs("A\n\n\n\nB"), "A\n\nB");
        assert_eq!(collapse_blank_runs("A\n\nB\n\n\nC"), "A\n\nB\n\nC");
        assert_eq!(collapse_blank_runs("A\nB"), "A\nB");
    }

    #[test]
    fn deleted_lines_can_create_runs_that_get_capped() {
        assert_eq!(normalize("Q\n\n!!\n\n--\n\nA"), "Q\n\nA");
    }

    #[test]
    fn trims_outer_whitespace() {
        assert_eq!(normalize("\n\n  hello  \n\n"), "hello");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn non_ascii_letters_count_as_words() {
        assert_eq!(normalize("été\n«»\nnaïve"), "été\nnaïve");
    }
}
