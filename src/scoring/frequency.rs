// Weighted term frequency.
//
// Counts every non-stopword token of the normalized text, then divides each
// count by the largest one. The most frequent term always ends up at exactly
// 1.0 and every other term lands in (0, 1].

use indexmap::IndexMap;
use tracing::debug;

use crate::error::SummaryError;
use crate::text::stopwords::StopwordSet;
use crate::text::tokenize::word_tokens;

ordered_scores! {
    /// Term weights keyed by case-folded word, in the order words were first seen.
    TermWeights
}

impl TermWeights {
    /// The largest weight, or `None` for an empty map.
    pub fn max_weight(&self) -> Option<f64> {
        self.0.values().copied().reduce(f64::max)
    }
}

/// Compute max-normalized term frequencies from normalized text.
///
/// `normalized` is expected to be the output of
/// [`normalize`](crate::text::normalize::normalize): lower-case letters and
/// single spaces. Returns [`SummaryError::EmptyVocabulary`] when no token
/// survives stopword filtering, so there is nothing to divide by.
pub fn weighted_term_frequency(
    normalized: &str,
    stopwords: &StopwordSet,
) -> Result<TermWeights, SummaryError> {
    let mut counts: IndexMap<&str, u32> = IndexMap::new();

    for token in word_tokens(normalized) {
        if stopwords.contains(token) {
            continue;
        }
        *counts.entry(token).or_insert(0) += 1;
    }

    let Some(max_count) = counts.values().copied().max() else {
        return Err(SummaryError::EmptyVocabulary);
    };

    debug!(terms = counts.len(), max_count, "Counted non-stopword terms");

    let max_count = f64::from(max_count);
    Ok(counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), f64::from(count) / max_count))
        .collect())
}
