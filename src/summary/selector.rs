// Top-K sentence selection.
//
// The summary is the K best-scoring sentences joined with single spaces,
// in score order rather than document order.

use crate::error::SummaryError;
use crate::scoring::sentence::SentenceScores;

/// How many sentences a summary holds unless configured otherwise.
pub const DEFAULT_SUMMARY_SENTENCES: usize = 5;

/// Pick the `k` highest-scoring sentences, best first.
///
/// Equal scores keep the order in which sentences first appeared. Fewer than
/// `k` scored sentences is fine: all of them are returned. An empty score map
/// is [`SummaryError::NoScorableSentences`].
pub fn select_top(scores: &SentenceScores, k: usize) -> Result<Vec<&str>, SummaryError> {
    if scores.is_empty() {
        return Err(SummaryError::NoScorableSentences);
    }

    Ok(scores
        .ranked(k)
        .into_iter()
        .map(|(sentence, _)| sentence)
        .collect())
}

/// Build the summary string from the `k` best sentences.
pub fn summarize(scores: &SentenceScores, k: usize) -> Result<String, SummaryError> {
    Ok(select_top(scores, k)?.join(" "))
}
