//! Lexicon Module
//!
//! Embedding table and the text reader that feeds it.

pub mod reader;
mod table;

pub use reader::Record;
pub use table::Lexicon;
