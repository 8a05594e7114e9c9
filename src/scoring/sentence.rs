// Sentence scoring.
//
// A sentence scores the sum of the weights of its words, counting every
// occurrence. Sentences with MAX_SENTENCE_TOKENS or more tokens are never
// scored, so long sentences cannot win on incidental keyword repetition.
//
// Scores are keyed by the exact sentence text. Two identical sentences in the
// same document share one key and their contributions add up.

use indexmap::IndexMap;
use tracing::debug;

use super::frequency::TermWeights;
use crate::text::tokenize::{sentences, word_tokens};

/// Sentences with this many word tokens or more are left unscored.
///
/// Punctuation tokens count toward the limit. The threshold is fixed.
pub const MAX_SENTENCE_TOKENS: usize = 30;

ordered_scores! {
    /// Sentence scores keyed by exact sentence text, in order of first appearance.
    SentenceScores
}

/// Score every sentence of `text` against the term weights.
///
/// `text` is the citation-stripped original, not the normalized text: the
/// keys must be real sentences. Each sentence is lower-cased before its words
/// are looked up. Sentences without a single weighted word are absent from
/// the result, as are sentences at or over [`MAX_SENTENCE_TOKENS`].
pub fn sentence_scores(text: &str, weights: &TermWeights) -> SentenceScores {
    let mut scores: IndexMap<String, f64> = IndexMap::new();
    let mut too_long = 0usize;
    let mut total = 0usize;

    for sentence in sentences(text) {
        total += 1;

        if word_tokens(sentence).len() >= MAX_SENTENCE_TOKENS {
            too_long += 1;
            continue;
        }

        let lowered = sentence.to_lowercase();
        for word in word_tokens(&lowered) {
            if let Some(weight) = weights.get(word) {
                *scores.entry(sentence.to_string()).or_insert(0.0) += weight;
            }
        }
    }

    debug!(
        sentences = total,
        scored = scores.len(),
        too_long,
        "Scored sentences"
    );

    SentenceScores(scores)
}
