use phrase_scrubber::{INJECTED_INTEGRITY_NOTICE, PhraseScrubber, scrub};
use proptest::prelude::*;

/// Text drawn from an alphabet without `h`, so "hello world" can never occur.
fn text_without_phrase() -> impl Strategy<Value = String> {
    "[a-gi-z0-9 \t\n.,*_-]{0,120}"
}

/// A phrase of 1..6 lowercase words separated by punctuation/whitespace runs.
fn phrase() -> impl Strategy<Value = String> {
    (
        prop::collection::vec("[a-z]{1,8}", 1..6),
        prop::collection::vec("[ ,.;:\n-]{1,3}", 6),
        "[\"* ]{0,2}",
        "[.!\" ]{0,2}",
    )
        .prop_map(|(words, gaps, lead, tail)| {
            let mut out = lead;
            for (i, w) in words.iter().enumerate() {
                if i > 0 {
                    out.push_str(&gaps[i]);
                }
                out.push_str(w);
            }
            out.push_str(&tail);
            out
        })
}

proptest! {
    #[test]
    fn idempotent_on_clean_text(t in text_without_phrase()) {
        let once = scrub(&t, "hello world");
        let twice = scrub(&once, "hello world");
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn verbatim_phrase_is_fully_removed(p in phrase()) {
        prop_assert_eq!(scrub(&p, &p), "");
    }

    #[test]
    fn empty_phrase_is_noop(t in "\\PC{0,80}") {
        prop_assert_eq!(scrub(&t, ""), t);
    }

    #[test]
    fn punctuation_only_phrase_is_noop(t in "\\PC{0,80}", p in "[ .,!?*\n-]{0,10}") {
        prop_assert_eq!(scrub(&t, &p), t);
    }

    #[test]
    fn uppercased_phrase_is_removed(p in phrase()) {
        let scrubber = PhraseScrubber::new(&p).unwrap();
        let report = scrubber.scrub_with_report(&p.to_uppercase());
        prop_assert_eq!(report.removed, 1);
        prop_assert_eq!(report.text, "");
    }
}

#[test]
fn notice_twice_with_question_between() {
    let text = format!(
        "{INJECTED_INTEGRITY_NOTICE}\n\nWhat is the capital of France?\n\n{INJECTED_INTEGRITY_NOTICE}"
    );
    let report = PhraseScrubber::new(INJECTED_INTEGRITY_NOTICE)
        .unwrap()
        .scrub_with_report(&text);
    assert_eq!(report.removed, 2);
    assert_eq!(report.text, "What is the capital of France?");
}

#[test]
fn scrubber_is_shareable_across_threads() {
    let scrubber = std::sync::Arc::new(PhraseScrubber::new("hello world").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let s = std::sync::Arc::clone(&scrubber);
            std::thread::spawn(move || s.scrub(&format!("{i} hello world {i}")))
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap(), format!("{i}  {i}"));
    }
}
