// Word and sentence tokenization.
//
// Both tokenizers return slices of the input so sentence keys stay exact
// substrings of the document. Word tokens follow Treebank conventions closely
// enough for scoring: punctuation marks are tokens of their own, hyphenated
// words stay whole and English contractions split off their clitic
// ("don't" -> "do" + "n't").
//
// A single line break inside a paragraph does not end a sentence. Only a
// blank line does.

use unicode_segmentation::UnicodeSegmentation;

/// Clitics split off the end of a word, matched case-insensitively.
const CLITICS: &[&str] = &["'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Abbreviations that end in a period without ending the sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "mt.", "vs.", "etc.", "e.g.",
    "i.e.", "inc.", "ltd.", "co.", "corp.", "fig.", "approx.", "dept.", "u.s.", "u.k.",
];

/// Split text into word tokens.
///
/// Whitespace is dropped, every punctuation character is its own token,
/// `word-word` runs with no spaces stay one token, and contractions are split
/// into stem and clitic. Casing is preserved, so callers lower-case first when
/// they need case-folded tokens.
pub fn word_tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();

    for word in hyphen_joined_segments(text) {
        match split_contraction(word) {
            (stem, Some(clitic)) => {
                tokens.push(stem);
                tokens.push(clitic);
            }
            (word, None) => tokens.push(word),
        }
    }

    tokens
}

/// Non-whitespace word-bound segments, with hyphenated words re-joined.
///
/// A lone `-` joins its neighbours only when both touch it and are word-like,
/// so "well-known" is one segment while "a - b" and "wait--no" are not joined.
fn hyphen_joined_segments(text: &str) -> Vec<&str> {
    let mut spans: Vec<(usize, usize)> = Vec::new();
    let mut after_hyphen = false;
    let mut segments = text.split_word_bound_indices().peekable();

    while let Some((start, segment)) = segments.next() {
        if segment.chars().all(char::is_whitespace) {
            continue;
        }
        let end = start + segment.len();

        match spans.last_mut() {
            Some(last) if after_hyphen => {
                last.1 = end;
                after_hyphen = false;
            }
            Some(last)
                if segment == "-"
                    && last.1 == start
                    && text[..start].chars().next_back().is_some_and(char::is_alphanumeric)
                    && segments
                        .peek()
                        .is_some_and(|&(next, s)| next == end && starts_word(s)) =>
            {
                last.1 = end;
                after_hyphen = true;
            }
            _ => spans.push((start, end)),
        }
    }

    spans.into_iter().map(|(start, end)| &text[start..end]).collect()
}

fn starts_word(segment: &str) -> bool {
    segment.chars().next().is_some_and(char::is_alphanumeric)
}

/// Split a single word into stem and clitic if it is a contraction.
fn split_contraction(word: &str) -> (&str, Option<&str>) {
    if word.len() > 3 {
        let split = word.len() - 3;
        if word.is_char_boundary(split) && word[split..].eq_ignore_ascii_case("n't") {
            return (&word[..split], Some(&word[split..]));
        }
    }

    if let Some(pos) = word.rfind('\'') {
        let suffix = &word[pos..];
        if pos > 0 && CLITICS.iter().any(|c| suffix.eq_ignore_ascii_case(c)) {
            return (&word[..pos], Some(suffix));
        }
    }

    (word, None)
}

/// Split text into sentences.
///
/// Uses Unicode sentence boundaries, then re-joins a boundary that falls right
/// after a known abbreviation or a single-letter initial ("Dr. Smith",
/// "J. Doe"). Line breaks inside a paragraph are read as spaces, so
/// hard-wrapped text still splits on punctuation. Each sentence is an exact,
/// trimmed slice of `text`; segments without any alphanumeric character are
/// dropped.
pub fn sentences(text: &str) -> Vec<&str> {
    let unwrapped = unwrap_lines(text);
    let mut out = Vec::new();
    let mut start = 0;
    let mut end = 0;

    // `unwrapped` has the same byte layout as `text`
    for segment in unwrapped.split_sentence_bounds() {
        end += segment.len();

        if end < text.len() && ends_with_abbreviation(segment) {
            continue;
        }

        push_sentence(&text[start..end], &mut out);
        start = end;
    }

    out
}

/// Replace each line break between two non-blank lines with spaces of the
/// same byte length. Blank lines are kept and still end a paragraph.
fn unwrap_lines(text: &str) -> String {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let mut out = String::with_capacity(text.len());

    for (i, line) in lines.iter().enumerate() {
        let content = line.trim_end_matches(['\r', '\n']);
        let wraps = !content.trim().is_empty()
            && line.len() > content.len()
            && lines.get(i + 1).is_some_and(|next| !next.trim().is_empty());

        if wraps {
            out.push_str(content);
            out.push_str(&" ".repeat(line.len() - content.len()));
        } else {
            out.push_str(line);
        }
    }

    out
}

fn push_sentence<'a>(candidate: &'a str, out: &mut Vec<&'a str>) {
    let trimmed = candidate.trim();
    if trimmed.chars().any(char::is_alphanumeric) {
        out.push(trimmed);
    }
}

fn ends_with_abbreviation(segment: &str) -> bool {
    let Some(last) = segment.split_whitespace().next_back() else {
        return false;
    };

    let lower = last.to_lowercase();
    if ABBREVIATIONS.contains(&lower.as_str()) {
        return true;
    }

    // Single capital initial, e.g. the "J." in "J. Doe". "I." is the pronoun.
    let mut chars = last.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(c), Some('.'), None) if c.is_uppercase() && c != 'I'
    )
}
