//! Error Types
//!
//! Failures raised while building a lexicon or querying it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the lexicon and the similarity engine.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// A source record could not be turned into (word, vector).
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// The word is not in the lexicon.
    #[error("unknown word: {0:?}")]
    UnknownWord(String),

    /// Normalization of a zero-magnitude vector.
    #[error("cannot normalize a zero-magnitude vector")]
    ZeroVector,

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read line {line}: {source}")]
    Io {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl LexiconError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LexiconError>;
