// SummaryReport: everything a summarization run shows the user.
//
// The intermediate maps are part of the output, not debug data: the shell
// displays the term weights and sentence scores next to the summary.

use serde::{Deserialize, Serialize};

use super::selector::select_top;
use crate::error::SummaryError;
use crate::scoring::frequency::TermWeights;
use crate::scoring::sentence::SentenceScores;

/// The scoring stages of a run, before any sentence is selected.
///
/// Kept apart from [`SummaryReport`] so the shell can still show the maps
/// when selection fails with [`SummaryError::NoScorableSentences`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub original_text: String,
    pub weighted_frequencies: TermWeights,
    pub sentence_scores: SentenceScores,
}

impl ScoredDocument {
    /// Pick the `k` best sentences and build the full report.
    pub fn select(&self, k: usize) -> Result<SummaryReport, SummaryError> {
        let selected: Vec<String> = select_top(&self.sentence_scores, k)?
            .into_iter()
            .map(str::to_string)
            .collect();

        Ok(SummaryReport {
            original_text: self.original_text.clone(),
            weighted_frequencies: self.weighted_frequencies.clone(),
            sentence_scores: self.sentence_scores.clone(),
            summary: selected.join(" "),
            selected,
        })
    }
}

/// The four user-facing results of one summarization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// The input exactly as supplied, before citation stripping
    pub original_text: String,
    /// Max-normalized term frequencies, in first-seen order
    pub weighted_frequencies: TermWeights,
    /// Scores of every eligible sentence, in order of first appearance
    pub sentence_scores: SentenceScores,
    /// Chosen sentences, best score first
    pub selected: Vec<String>,
    /// `selected` joined with single spaces
    pub summary: String,
}

impl SummaryReport {
    /// Summary length as a fraction of the original, in characters.
    ///
    /// Returns 0.0 for an empty original.
    pub fn compression_ratio(&self) -> f64 {
        let original = self.original_text.chars().count();
        if original == 0 {
            0.0
        } else {
            self.summary.chars().count() as f64 / original as f64
        }
    }
}
