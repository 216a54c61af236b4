//! Nearest-Neighbor Query Configuration

use hashbrown::HashSet;

/// Number of neighbors returned when a query doesn't say otherwise
pub const DEFAULT_NEIGHBORS: usize = 5;

/// A nearest-neighbor or analogy query.
///
/// The search target is `word + plus - minus`; analogy terms are added to
/// the exclusions at search time without touching `exclude` itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearestQuery {
    /// Center word
    pub word: String,
    /// Words never returned in results
    pub exclude: HashSet<String>,
    /// Maximum number of results
    pub n: usize,
    /// Word whose vector is added to the target
    pub plus: Option<String>,
    /// Word whose vector is subtracted from the target
    pub minus: Option<String>,
}

impl NearestQuery {
    /// Query around `word` with no exclusions.
    ///
    /// The word itself is not excluded: it scores 0 against its own vector
    /// and ranks first unless the caller excludes it.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            exclude: HashSet::new(),
            n: DEFAULT_NEIGHBORS,
            plus: None,
            minus: None,
        }
    }

    /// Replace the exclusion set
    pub fn with_exclude<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = words.into_iter().map(Into::into).collect();
        self
    }

    /// Add one word to the exclusion set
    pub fn exclude_word(mut self, word: impl Into<String>) -> Self {
        self.exclude.insert(word.into());
        self
    }

    /// Exclude the center word from its own results
    pub fn excluding_self(self) -> Self {
        let word = self.word.clone();
        self.exclude_word(word)
    }

    pub fn with_n(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    pub fn with_plus(mut self, plus: impl Into<String>) -> Self {
        self.plus = Some(plus.into());
        self
    }

    pub fn with_minus(mut self, minus: impl Into<String>) -> Self {
        self.minus = Some(minus.into());
        self
    }

    /// Whether `plus` or `minus` shifts the target
    pub fn is_analogy(&self) -> bool {
        self.plus.is_some() || self.minus.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = NearestQuery::new("king");
        assert_eq!(query.word, "king");
        assert_eq!(query.n, DEFAULT_NEIGHBORS);
        assert!(query.exclude.is_empty());
        assert!(!query.is_analogy());
    }

    #[test]
    fn test_builder() {
        let query = NearestQuery::new("king")
            .excluding_self()
            .exclude_word("royal")
            .with_n(3)
            .with_plus("woman")
            .with_minus("man");

        assert!(query.exclude.contains("king"));
        assert!(query.exclude.contains("royal"));
        assert_eq!(query.n, 3);
        assert_eq!(query.plus.as_deref(), Some("woman"));
        assert_eq!(query.minus.as_deref(), Some("man"));
        assert!(query.is_analogy());
    }

    #[test]
    fn test_with_exclude_replaces() {
        let query = NearestQuery::new("a")
            .exclude_word("x")
            .with_exclude(["b", "c"]);

        assert_eq!(query.exclude.len(), 2);
        assert!(!query.exclude.contains("x"));
    }
}
