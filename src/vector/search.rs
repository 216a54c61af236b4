//! Nearest-Neighbor Search
//!
//! Brute-force ranking of the whole vocabulary against a (possibly
//! analogy-shifted) target vector.

use std::fmt;

use hashbrown::HashSet;

use super::query::NearestQuery;
use super::similarity::normalized_distance_batch;
use crate::error::Result;
use crate::lexicon::Lexicon;

/// One ranked search result
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub word: String,
    /// Normalized distance to the target (lower is closer)
    pub score: f32,
}

impl fmt::Display for Neighbor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.6})", self.word, self.score)
    }
}

/// Find the `query.n` words closest to `word + plus - minus`.
///
/// Every vocabulary word is scored, including the query and analogy terms;
/// exclusions are applied after ranking. Ties keep vocabulary order.
pub fn find_nearest(lexicon: &Lexicon, query: &NearestQuery) -> Result<Vec<Neighbor>> {
    if lexicon.is_empty() {
        return Ok(Vec::new());
    }

    let mut target = lexicon.get_vector(&query.word)?.to_owned();
    let mut exclude: HashSet<&str> = query.exclude.iter().map(String::as_str).collect();

    if let Some(plus) = query.plus.as_deref() {
        target += &lexicon.get_vector(plus)?;
        exclude.insert(plus);
    }
    if let Some(minus) = query.minus.as_deref() {
        target -= &lexicon.get_vector(minus)?;
        exclude.insert(minus);
    }

    let distances = normalized_distance_batch(target.view(), lexicon.vectors())?;

    let mut ranked: Vec<(&str, f32)> = lexicon
        .words()
        .iter()
        .map(String::as_str)
        .zip(distances.iter().copied())
        .collect();

    // Stable: equal distances keep vocabulary order
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

    Ok(ranked
        .into_iter()
        .filter(|(word, _)| !exclude.contains(word))
        .take(query.n)
        .map(|(word, score)| Neighbor {
            word: word.to_string(),
            score,
        })
        .collect())
}

impl Lexicon {
    /// See [`find_nearest`]
    pub fn find_nearest(&self, query: &NearestQuery) -> Result<Vec<Neighbor>> {
        find_nearest(self, query)
    }
}
