use thiserror::Error;

/// Errors raised while compiling a phrase into a match rule.
#[derive(Debug, Error)]
pub enum ScrubError {
    /// The phrase has so many tokens that the compiled rule exceeds the regex size limit.
    #[error("phrase with {tokens} tokens is too large to compile: {source}")]
    PatternTooLarge {
        tokens: usize,
        #[source]
        source: regex::Error,
    },
}
