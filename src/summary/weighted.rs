// Weighted term-frequency summarizer — the default Summarizer.
//
// Runs the whole pipeline for one document:
//
//   raw text -> strip citations -> normalize -> term weights
//            -> sentence scores (on the citation-stripped text) -> top K
//
// Every run builds its own maps. The only shared state is the stopword set,
// which is immutable and lives for the whole process.

use tracing::info;

use super::report::{ScoredDocument, SummaryReport};
use super::selector::DEFAULT_SUMMARY_SENTENCES;
use super::traits::Summarizer;
use crate::error::SummaryError;
use crate::scoring::frequency::{weighted_term_frequency, TermWeights};
use crate::scoring::sentence::sentence_scores;
use crate::text::normalize::{normalize, strip_citations};
use crate::text::stopwords::{StopwordSet, StopwordSource};

/// Scores sentences by the max-normalized frequency of their non-stopwords.
#[derive(Debug, Clone, Copy)]
pub struct WeightedFrequencySummarizer<'a> {
    /// How many sentences the summary holds
    pub sentence_count: usize,
    stopwords: &'a StopwordSet,
}

impl Default for WeightedFrequencySummarizer<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_SUMMARY_SENTENCES, StopwordSource::default())
    }
}

impl WeightedFrequencySummarizer<'static> {
    /// Summarizer using one of the built-in English stopword lists.
    pub fn new(sentence_count: usize, source: StopwordSource) -> Self {
        Self {
            sentence_count,
            stopwords: StopwordSet::english(source),
        }
    }
}

impl<'a> WeightedFrequencySummarizer<'a> {
    /// Summarizer using a caller-supplied stopword set.
    pub fn with_stopwords(sentence_count: usize, stopwords: &'a StopwordSet) -> Self {
        Self {
            sentence_count,
            stopwords,
        }
    }

    /// Only the term-weight stage: strip citations, normalize, weigh.
    pub fn term_weights(&self, text: &str) -> Result<TermWeights, SummaryError> {
        let normalized = normalize(&strip_citations(text));
        weighted_term_frequency(&normalized, self.stopwords)
    }

    /// Every stage but selection. Fails only on an empty vocabulary; a
    /// document with no scorable sentence comes back with an empty score map.
    pub fn score(&self, text: &str) -> Result<ScoredDocument, SummaryError> {
        let cleaned = strip_citations(text);
        let normalized = normalize(&cleaned);

        let weighted_frequencies = weighted_term_frequency(&normalized, self.stopwords)?;
        let scores = sentence_scores(&cleaned, &weighted_frequencies);

        Ok(ScoredDocument {
            original_text: text.to_string(),
            weighted_frequencies,
            sentence_scores: scores,
        })
    }
}

impl Summarizer for WeightedFrequencySummarizer<'_> {
    fn summarize(&self, text: &str) -> Result<SummaryReport, SummaryError> {
        let report = self.score(text)?.select(self.sentence_count)?;

        info!(
            terms = report.weighted_frequencies.len(),
            scored_sentences = report.sentence_scores.len(),
            selected = report.selected.len(),
            "Summarized document"
        );

        Ok(report)
    }
}
