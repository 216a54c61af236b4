//! Lexicon
//!
//! Immutable word -> embedding table backed by a single row-major matrix.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::HashMap;
use ndarray::{Array2, ArrayView1, ArrayView2};
use tracing::{debug, info};

use super::reader::{self, Record};
use crate::error::{LexiconError, Result};

/// Word embedding table.
///
/// Row `i` of the matrix belongs to `words[i]`, so iteration order is the
/// order in which words first appeared in the source.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: Vec<String>,
    index: HashMap<String, usize>,
    vectors: Array2<f32>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            index: HashMap::new(),
            vectors: Array2::zeros((0, 0)),
        }
    }
}

impl Lexicon {
    /// Build a lexicon from tokenized records.
    ///
    /// Every record needs a word and at least one finite number, and all
    /// vectors must share the dimension of the first record. A repeated
    /// word keeps its first position but takes the later vector.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Record>,
    {
        Self::try_from_records(records.into_iter().map(Ok))
    }

    /// Load from any buffered source in the embedding text format
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::try_from_records(reader::records(reader))
    }

    /// Load from an embeddings file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening embeddings file {}", path.display());

        let file = File::open(path).map_err(|source| LexiconError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_reader(BufReader::new(file))?;

        info!(
            "Loaded {} words of dimension {} from {}",
            lexicon.len(),
            lexicon.dimension(),
            path.display()
        );
        Ok(lexicon)
    }

    fn try_from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Record>>,
    {
        let mut words: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut rows: Vec<Vec<f32>> = Vec::new();
        let mut dimension: Option<usize> = None;

        for record in records {
            let record = record?;
            let (word, vector) = parse_record(&record)?;

            match dimension {
                None => dimension = Some(vector.len()),
                Some(dim) if dim != vector.len() => {
                    return Err(LexiconError::malformed(
                        record.line,
                        format!("expected {} values, found {}", dim, vector.len()),
                    ));
                }
                Some(_) => {}
            }

            match index.get(word) {
                Some(&row) => rows[row] = vector,
                None => {
                    index.insert(word.to_string(), words.len());
                    words.push(word.to_string());
                    rows.push(vector);
                }
            }
        }

        let dim = dimension.unwrap_or(0);
        let flat: Vec<f32> = rows.into_iter().flatten().collect();
        let expected = words.len() * dim;
        let found = flat.len();
        let vectors = Array2::from_shape_vec((words.len(), dim), flat)
            .map_err(|_| LexiconError::DimensionMismatch { expected, found })?;

        Ok(Self {
            words,
            index,
            vectors,
        })
    }

    /// Exact lookup of a word's vector
    pub fn get_vector(&self, word: &str) -> Result<ArrayView1<'_, f32>> {
        self.index_of(word)
            .map(|row| self.vectors.row(row))
            .ok_or_else(|| LexiconError::UnknownWord(word.to_string()))
    }

    /// Row index of a word in the embedding matrix
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Embedding dimension (0 for an empty lexicon)
    pub fn dimension(&self) -> usize {
        self.vectors.ncols()
    }

    /// Words in row order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The full embedding matrix, one row per word
    pub fn vectors(&self) -> ArrayView2<'_, f32> {
        self.vectors.view()
    }

    /// Iterate (word, vector) pairs in row order
    pub fn iter(&self) -> impl Iterator<Item = (&str, ArrayView1<'_, f32>)> {
        self.words
            .iter()
            .map(String::as_str)
            .zip(self.vectors.rows())
    }
}

fn parse_record(record: &Record) -> Result<(&str, Vec<f32>)> {
    let word = record
        .word()
        .ok_or_else(|| LexiconError::malformed(record.line, "missing word"))?;

    let values = record.values();
    if values.is_empty() {
        return Err(LexiconError::malformed(
            record.line,
            format!("no values for word {:?}", word),
        ));
    }

    let vector = values
        .iter()
        .map(|field| match field.parse::<f32>() {
            Ok(x) if x.is_finite() => Ok(x),
            Ok(_) => Err(LexiconError::malformed(
                record.line,
                format!("non-finite value {:?}", field),
            )),
            Err(e) => Err(LexiconError::malformed(
                record.line,
                format!("invalid number {:?}: {}", field, e),
            )),
        })
        .collect::<Result<Vec<f32>>>()?;

    Ok((word, vector))
}
