// Raw text cleanup ahead of term counting.
//
// Two separate steps with different inputs:
//
//   1. `strip_citations` runs on the raw text and keeps its casing and
//      punctuation, because sentence segmentation later needs real sentence
//      boundaries. Only bracketed reference markers like `[12]` are removed.
//   2. `normalize` produces the lower-case, letters-only text that term
//      frequencies are counted from. It is never shown to the user.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Bracketed numeric references such as `[3]` or `[12]`. Empty `[]` matches too.
static CITATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[0-9]*\]").expect("citation pattern is valid"));

/// Any run of characters that is not an ASCII lower-case letter.
static NON_ALPHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z]+").expect("non-alpha pattern is valid"));

static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]").expect("digit pattern is valid"));

/// Replace every bracketed citation marker with a single space.
///
/// Operates on the raw text (before lower-casing) so that the sentence
/// tokenizer still sees the original punctuation and capitalization.
pub fn strip_citations(raw: &str) -> String {
    CITATION.replace_all(raw, " ").into_owned()
}

/// Lower-case the text and collapse everything that is not a letter into
/// single spaces.
///
/// Letters outside ASCII `a-z` count as non-alphabetic. The result may be
/// empty or all spaces when the input has no letters at all. Applying
/// `normalize` to its own output returns the same string.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let letters_only = NON_ALPHA.replace_all(&lowered, " ");
    // No-op while NON_ALPHA covers digits
    DIGIT.replace_all(&letters_only, "").into_owned()
}
