// Composition tests — the full pipeline through the public API.
//
// These tests chain the stages the way the CLI does:
//   strip citations -> normalize -> term weights -> sentence scores -> summary
// and assert hand-computed results for small fixed documents.

use gist::error::SummaryError;
use gist::scoring::frequency::weighted_term_frequency;
use gist::scoring::sentence::{sentence_scores, MAX_SENTENCE_TOKENS};
use gist::summary::selector::summarize;
use gist::summary::traits::Summarizer;
use gist::summary::weighted::WeightedFrequencySummarizer;
use gist::text::normalize::{normalize, strip_citations};
use gist::text::stopwords::{StopwordSet, StopwordSource};

fn nltk() -> &'static StopwordSet {
    StopwordSet::english(StopwordSource::Nltk)
}

// ============================================================
// Hand-computed document: cats and dogs
// ============================================================

const PETS: &str = "Cats are great. Dogs are great too. Cats and dogs are pets.";

#[test]
fn pets_term_weights_exact() {
    // Non-stopword counts: cats 2, great 2, dogs 2, pets 1 ("too" is a stopword)
    let weights = weighted_term_frequency(&normalize(PETS), nltk()).unwrap();

    let entries: Vec<(&str, f64)> = weights.iter().collect();
    assert_eq!(
        entries,
        vec![("cats", 1.0), ("great", 1.0), ("dogs", 1.0), ("pets", 0.5)]
    );
}

#[test]
fn pets_sentence_scores_exact() {
    let weights = weighted_term_frequency(&normalize(PETS), nltk()).unwrap();
    let scores = sentence_scores(PETS, &weights);

    let entries: Vec<(&str, f64)> = scores.iter().collect();
    assert_eq!(
        entries,
        vec![
            ("Cats are great.", 2.0),
            ("Dogs are great too.", 2.0),
            ("Cats and dogs are pets.", 2.5),
        ]
    );
}

#[test]
fn pets_summary_top_two() {
    let summarizer = WeightedFrequencySummarizer::new(2, StopwordSource::Nltk);
    let report = summarizer.summarize(PETS).unwrap();

    // 2.5 first, then the 2.0 tie resolved by first appearance
    assert_eq!(report.summary, "Cats and dogs are pets. Cats are great.");
    assert_eq!(
        report.selected,
        vec!["Cats and dogs are pets.", "Cats are great."]
    );
}

// ============================================================
// Error states
// ============================================================

#[test]
fn only_stopwords_is_empty_vocabulary() {
    let summarizer = WeightedFrequencySummarizer::default();
    assert_eq!(
        summarizer.summarize("the a an of to"),
        Err(SummaryError::EmptyVocabulary)
    );
}

#[test]
fn numbers_and_punctuation_only_is_empty_vocabulary() {
    let summarizer = WeightedFrequencySummarizer::default();
    assert_eq!(
        summarizer.summarize("1999, 2024... 42!"),
        Err(SummaryError::EmptyVocabulary)
    );
}

#[test]
fn only_long_sentences_is_no_scorable_sentences() {
    // One sentence of exactly MAX_SENTENCE_TOKENS tokens: vocabulary exists,
    // but the sentence is over the cap
    let text = vec!["word"; MAX_SENTENCE_TOKENS].join(" ");

    let summarizer = WeightedFrequencySummarizer::default();
    assert_eq!(summarizer.term_weights(&text).unwrap().get("word"), Some(1.0));
    assert_eq!(
        summarizer.summarize(&text),
        Err(SummaryError::NoScorableSentences)
    );

    // The maps computed before selection are still available
    let scored = summarizer.score(&text).unwrap();
    assert_eq!(scored.weighted_frequencies.get("word"), Some(1.0));
    assert!(scored.sentence_scores.is_empty());
    assert_eq!(scored.select(5), Err(SummaryError::NoScorableSentences));
}

// ============================================================
// Duplicates, short documents, citations
// ============================================================

#[test]
fn repeated_sentence_collapses_to_double_score() {
    let single = WeightedFrequencySummarizer::default()
        .summarize("Cats chase mice.")
        .unwrap();
    let doubled = WeightedFrequencySummarizer::default()
        .summarize("Cats chase mice. Cats chase mice.")
        .unwrap();

    assert_eq!(doubled.sentence_scores.len(), 1);
    let once = single.sentence_scores.get("Cats chase mice.").unwrap();
    let twice = doubled.sentence_scores.get("Cats chase mice.").unwrap();
    assert_eq!(twice, 2.0 * once);
    assert_eq!(doubled.summary, "Cats chase mice.");
}

#[test]
fn fewer_sentences_than_k_returns_all_without_padding() {
    let text = "Rivers carry water. Mountains hold snow. Rain feeds rivers.";
    let summarizer = WeightedFrequencySummarizer::new(5, StopwordSource::Nltk);
    let report = summarizer.summarize(text).unwrap();

    assert_eq!(report.selected.len(), 3);
    for sentence in &report.selected {
        assert!(report.sentence_scores.contains(sentence));
    }
}

#[test]
fn citation_does_not_fracture_sentence() {
    let report = WeightedFrequencySummarizer::default()
        .summarize("Text [12] more text.")
        .unwrap();

    assert_eq!(report.sentence_scores.len(), 1);
    assert!(report.sentence_scores.contains("Text   more text."));
    assert_eq!(report.weighted_frequencies.get("text"), Some(1.0));
    assert_eq!(report.weighted_frequencies.get("more"), None);
}

#[test]
fn citation_between_sentences_keeps_boundary() {
    let cleaned = strip_citations("Cats purr loudly.[3] Dogs bark.");
    let weights = weighted_term_frequency(&normalize(&cleaned), nltk()).unwrap();
    let scores = sentence_scores(&cleaned, &weights);

    let keys: Vec<&str> = scores.iter().map(|(s, _)| s).collect();
    assert_eq!(keys, vec!["Cats purr loudly.", "Dogs bark."]);
    assert!(!weights.iter().any(|(w, _)| w.chars().any(|c| c.is_ascii_digit())));
}

#[test]
fn hard_wrapped_document_scores_like_unwrapped() {
    let wrapped = "Cats are great. Dogs are\ngreat too. Cats and dogs\r\nare pets.\n";
    let report = WeightedFrequencySummarizer::new(2, StopwordSource::Nltk)
        .summarize(wrapped)
        .unwrap();

    let scores: Vec<(&str, f64)> = report.sentence_scores.iter().collect();
    assert_eq!(
        scores,
        vec![
            ("Cats are great.", 2.0),
            ("Dogs are\ngreat too.", 2.0),
            ("Cats and dogs\r\nare pets.", 2.5),
        ]
    );
    assert_eq!(
        report.selected,
        vec!["Cats and dogs\r\nare pets.", "Cats are great."]
    );
}

// ============================================================
// Properties over a small corpus
// ============================================================

const CORPUS: &[&str] = &[
    PETS,
    "Forensic science, also known as criminalistics, is the application of science to \
     criminal and civil laws. Forensic scientists collect, preserve, and analyze scientific \
     evidence during the course of an investigation. Some forensic scientists travel to the \
     scene of the crime to collect the evidence themselves.",
    "Rust is a systems language. It has no garbage collector! Does it need one? \
     Ownership rules manage memory at compile time.",
    "Dr. Smith studied bees in 1999 [4]. Bees pollinate crops. Crops feed people [5][6].",
];

#[test]
fn weights_are_in_unit_interval_with_a_one() {
    for text in CORPUS {
        let weights = weighted_term_frequency(&normalize(&strip_citations(text)), nltk()).unwrap();
        assert!(!weights.is_empty());
        for (word, weight) in weights.iter() {
            assert!(weight > 0.0 && weight <= 1.0, "{word} has weight {weight}");
        }
        assert_eq!(weights.max_weight(), Some(1.0));
    }
}

#[test]
fn normalize_is_idempotent() {
    for text in CORPUS {
        let once = normalize(text);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn large_k_returns_every_scored_sentence_once() {
    for text in CORPUS {
        let report = WeightedFrequencySummarizer::new(100, StopwordSource::Nltk)
            .summarize(text)
            .unwrap();

        assert_eq!(report.selected.len(), report.sentence_scores.len());
        for (sentence, _) in report.sentence_scores.iter() {
            let hits = report.selected.iter().filter(|s| s.as_str() == sentence).count();
            assert_eq!(hits, 1, "{sentence:?} selected {hits} times");
        }
        assert_eq!(report.summary, report.selected.join(" "));
    }
}

#[test]
fn selector_matches_report_summary() {
    for text in CORPUS {
        let summarizer = WeightedFrequencySummarizer::new(2, StopwordSource::Nltk);
        let report = summarizer.summarize(text).unwrap();
        assert_eq!(summarize(&report.sentence_scores, 2).unwrap(), report.summary);
    }
}

#[test]
fn iso_stopwords_still_summarize() {
    let summarizer = WeightedFrequencySummarizer::new(1, StopwordSource::Iso);
    let report = summarizer.summarize(CORPUS[1]).unwrap();
    assert_eq!(report.selected.len(), 1);
    assert!(report.weighted_frequencies.contains("forensic"));
}

#[test]
fn report_serializes_with_all_outputs() {
    let report = WeightedFrequencySummarizer::new(2, StopwordSource::Nltk)
        .summarize(PETS)
        .unwrap();
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["original_text"], PETS);
    assert_eq!(json["weighted_frequencies"]["pets"], 0.5);
    assert_eq!(json["sentence_scores"]["Cats and dogs are pets."], 2.5);
    assert_eq!(json["summary"], "Cats and dogs are pets. Cats are great.");
}
