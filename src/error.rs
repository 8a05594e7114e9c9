// Core error taxonomy for the summarization pipeline.
//
// Both variants are recoverable: the shell maps each one to a user-facing
// message. Input and file errors live in `input` since the core never sees them.

use thiserror::Error;

/// Errors raised by the scoring pipeline itself.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SummaryError {
    /// The normalized text contained no non-stopword tokens, so there is no
    /// maximum frequency to normalize by.
    #[error("the text has no words left after removing stopwords, numbers and punctuation")]
    EmptyVocabulary,

    /// Every sentence was either too long or contained no weighted words.
    #[error("no summary could be generated: no sentence is short enough and contains a weighted word")]
    NoScorableSentences,
}
