// Scoring: weighted term frequencies and per-sentence scores.

use std::cmp::Ordering;

/// Define an insertion-ordered `String -> f64` score map newtype with the
/// shared read surface: `get`, `contains`, `len`, `is_empty`, `iter`,
/// `ranked` and `FromIterator`.
macro_rules! ordered_scores {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(indexmap::IndexMap<String, f64>);

        impl $name {
            pub fn get(&self, key: &str) -> Option<f64> {
                self.0.get(key).copied()
            }

            pub fn contains(&self, key: &str) -> bool {
                self.0.contains_key(key)
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Iterate `(key, score)` in first-seen order.
            pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
                self.0.iter().map(|(k, v)| (k.as_str(), *v))
            }

            /// The `n` highest scores, highest first. Ties keep first-seen order.
            pub fn ranked(&self, n: usize) -> Vec<(&str, f64)> {
                $crate::scoring::rank_desc(self.iter(), n)
            }
        }

        impl FromIterator<(String, f64)> for $name {
            fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }
    };
}

pub mod frequency;
pub mod sentence;

/// Sort `(key, score)` pairs by score, highest first, and keep the first `n`.
///
/// The sort is stable, so equal scores keep their incoming order. Callers pass
/// entries in first-seen order, which makes ties resolve to first appearance.
pub(crate) fn rank_desc<'a>(
    entries: impl Iterator<Item = (&'a str, f64)>,
    n: usize,
) -> Vec<(&'a str, f64)> {
    let mut ranked: Vec<(&str, f64)> = entries.collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.truncate(n);
    ranked
}
