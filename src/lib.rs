//! WORDVEC - Word Embedding Lookup and Analogy Search
//!
//! Loads a static table of word vectors and answers exact lookups,
//! normalized distances and brute-force nearest-neighbor/analogy queries.

pub mod error;
pub mod lexicon;
pub mod vector;

pub use error::{LexiconError, Result};
pub use lexicon::{Lexicon, Record};
pub use vector::{
    find_nearest, normalized_distance, normalized_distance_batch, NearestQuery, Neighbor,
    DEFAULT_NEIGHBORS,
};
