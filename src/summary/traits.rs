// Summarizer trait — swap-ready abstraction.
//
// The shell only talks to this trait, so the weighted term-frequency method
// can sit next to other extractive scorers without touching the CLI.

use super::report::SummaryReport;
use crate::error::SummaryError;

/// Trait for turning one document into a summary report.
pub trait Summarizer {
    /// Summarize a single plain-text document.
    fn summarize(&self, text: &str) -> Result<SummaryReport, SummaryError>;
}
