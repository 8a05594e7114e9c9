// Fixed English stopword sets.
//
// Each set is built once on first use and then shared read-only by every
// summarization run in the process. Callers hold a `&'static StopwordSet`
// for the lifetime of a pipeline instead of rebuilding the list per word.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use stop_words::{get, LANGUAGE};

/// Which English stopword list to filter with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StopwordSource {
    /// The 179-word NLTK English list (default).
    #[default]
    Nltk,
    /// The larger stopwords-iso English list shipped by the `stop-words` crate.
    Iso,
}

impl FromStr for StopwordSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nltk" => Ok(Self::Nltk),
            "iso" => Ok(Self::Iso),
            other => Err(format!("unknown stopword list '{other}' (expected 'nltk' or 'iso')")),
        }
    }
}

impl fmt::Display for StopwordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nltk => f.write_str("nltk"),
            Self::Iso => f.write_str("iso"),
        }
    }
}

/// NLTK's English stopword corpus.
const NLTK_ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

static NLTK: LazyLock<StopwordSet> =
    LazyLock::new(|| StopwordSet::from_words(NLTK_ENGLISH.iter().copied()));

static ISO: LazyLock<StopwordSet> = LazyLock::new(|| {
    let words: Vec<String> = get(LANGUAGE::English);
    StopwordSet::from_words(words.iter().map(String::as_str))
});

/// An immutable set of lower-case stopwords.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build a set from an arbitrary word list. Words are lower-cased.
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            words: words.into_iter().map(str::to_lowercase).collect(),
        }
    }

    /// The process-wide English set for `source`, built on first use.
    pub fn english(source: StopwordSource) -> &'static StopwordSet {
        match source {
            StopwordSource::Nltk => &NLTK,
            StopwordSource::Iso => &ISO,
        }
    }

    /// Check whether an already lower-cased token is a stopword.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
