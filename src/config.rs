use std::env;

use anyhow::{Context, Result};

use crate::summary::selector::DEFAULT_SUMMARY_SENTENCES;
use crate::text::stopwords::StopwordSource;

/// Default number of terms listed in the terminal view.
pub const DEFAULT_TOP_TERMS: usize = 15;

/// Central configuration loaded from environment variables.
///
/// Every value has a default, so an empty environment is valid. The .env
/// file is loaded automatically at startup via dotenvy. CLI flags override
/// whatever is set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Sentences per summary (GIST_SENTENCES, default 5)
    pub summary_sentences: usize,
    /// English stopword list (GIST_STOPWORDS: nltk or iso, default nltk)
    pub stopwords: StopwordSource,
    /// Terms shown in the weight table (GIST_TOP_TERMS, default 15)
    pub top_terms: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
            stopwords: StopwordSource::default(),
            top_terms: DEFAULT_TOP_TERMS,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset or blank variables fall back to their defaults. Values that are
    /// set but invalid are errors, not silent defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let summary_sentences = match get("GIST_SENTENCES") {
            Some(raw) => parse_count("GIST_SENTENCES", &raw)?,
            None => defaults.summary_sentences,
        };

        let stopwords = match get("GIST_STOPWORDS") {
            Some(raw) => raw
                .parse::<StopwordSource>()
                .map_err(anyhow::Error::msg)
                .context("GIST_STOPWORDS is invalid")?,
            None => defaults.stopwords,
        };

        let top_terms = match get("GIST_TOP_TERMS") {
            Some(raw) => parse_count("GIST_TOP_TERMS", &raw)?,
            None => defaults.top_terms,
        };

        Ok(Self {
            summary_sentences,
            stopwords,
            top_terms,
        })
    }
}

/// Parse a positive count from an environment value.
fn parse_count(key: &str, raw: &str) -> Result<usize> {
    let value: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("{key} must be a positive integer, got '{raw}'"))?;
    if value == 0 {
        anyhow::bail!("{key} must be at least 1");
    }
    Ok(value)
}
