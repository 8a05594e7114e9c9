// Colored terminal output for summary reports.
//
// Renders the four results of a run in the order the user reads them:
// original text, term weights, sentence scores, summary.

use colored::Colorize;

use crate::scoring::frequency::TermWeights;
use crate::scoring::sentence::SentenceScores;
use crate::summary::report::SummaryReport;

const BAR_WIDTH: usize = 20;
const SENTENCE_PREVIEW_CHARS: usize = 90;

/// Display a whole report.
pub fn display_report(report: &SummaryReport, top_terms: usize) {
    display_original(&report.original_text);
    display_term_weights(&report.weighted_frequencies, top_terms);
    display_sentence_scores(&report.sentence_scores, &report.selected);
    display_summary(report);
}

/// Display the original text as given.
pub fn display_original(text: &str) {
    println!("\n{}", "=== Original Text ===".bold());
    println!();
    println!("{}", text.trim_end().dimmed());
}

/// Display the heaviest terms as a bar chart.
pub fn display_term_weights(weights: &TermWeights, top: usize) {
    println!(
        "\n{}",
        format!(
            "=== Weighted Term Frequencies (top {} of {}) ===",
            top.min(weights.len()),
            weights.len()
        )
        .bold()
    );
    println!();

    for (i, (word, weight)) in weights.ranked(top).into_iter().enumerate() {
        let filled = (weight * BAR_WIDTH as f64).round() as usize;
        let empty = BAR_WIDTH.saturating_sub(filled);
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

        let colored_bar = if weight >= 0.75 {
            bar.bright_green()
        } else if weight >= 0.4 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!("  {:>3}. {:<24} {} {:.3}", i + 1, word.bold(), colored_bar, weight);
    }
}

/// Display every scored sentence in document order, marking the selected ones.
pub fn display_sentence_scores(scores: &SentenceScores, selected: &[String]) {
    println!(
        "\n{}",
        format!("=== Sentence Scores ({} sentences) ===", scores.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:>7}  {}",
        "#".dimmed(),
        "Score".dimmed(),
        "Sentence".dimmed()
    );
    println!("  {}", "-".repeat(78).dimmed());

    for (i, (sentence, score)) in scores.iter().enumerate() {
        let preview = super::truncate_chars(sentence, SENTENCE_PREVIEW_CHARS);
        let marker = if selected.iter().any(|s| s == sentence) {
            "*".green().bold()
        } else {
            " ".normal()
        };
        println!("  {:>4}. {:>7.3} {} {}", i + 1, score, marker, preview);
    }
}

/// Display the summary and how much of the original it keeps.
pub fn display_summary(report: &SummaryReport) {
    println!(
        "\n{}",
        format!("=== Summary ({} sentences) ===", report.selected.len()).bold()
    );
    println!();
    println!("{}", report.summary.bright_white());
    println!();
    println!(
        "{}",
        format!(
            "Kept {:.0}% of the original text.",
            report.compression_ratio() * 100.0
        )
        .dimmed()
    );
}
