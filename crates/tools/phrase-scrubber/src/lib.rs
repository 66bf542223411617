//! Fuzzy removal of a known multi-word phrase from pasted text.
//!
//! Pasted page content sometimes carries an injected instruction block that
//! has been re-wrapped or re-punctuated on the way to the clipboard. The
//! [`PhraseScrubber`] matches the phrase's words in order while tolerating any
//! run of non-word characters between them, removes every occurrence, and then
//! tidies the whitespace left behind.
//!
//! # Example
//! ```
//! use phrase_scrubber::scrub;
//!
//! let cleaned = scrub("Intro\n\nhello,\n   WORLD!\n\nQuestion?", "Hello world");
//! assert_eq!(cleaned, "Intro\n\nQuestion?");
//! ```
//!
//! The scrubber is a pure function of `(text, phrase)`: no I/O, no shared
//! state, safe to share across threads behind an `Arc`.

pub mod error;
pub mod normalize;
pub mod scrubber;
pub mod target;
mod word;

pub use error::ScrubError;
pub use normalize::normalize;
pub use scrubber::{PhraseScrubber, ScrubReport, scrub};
pub use target::INJECTED_INTEGRITY_NOTICE;
