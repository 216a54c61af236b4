//! Vector Module
//!
//! Distance metric and nearest-neighbor/analogy search over a lexicon.

mod query;
mod search;
mod similarity;

pub use query::{NearestQuery, DEFAULT_NEIGHBORS};
pub use search::{find_nearest, Neighbor};
pub use similarity::{magnitude, normalized, normalized_distance, normalized_distance_batch};
