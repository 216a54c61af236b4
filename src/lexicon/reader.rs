//! Embedding Text Reader
//!
//! Turns the whitespace-separated embedding format
//! (`<word> <f1> <f2> ... <fd>`, one entry per line) into records.

use std::io::BufRead;

use crate::error::{LexiconError, Result};

/// One tokenized line of an embedding source.
///
/// The first field is the word, the rest are its (still textual)
/// vector components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the source
    pub line: usize,
    /// Raw whitespace-separated fields
    pub fields: Vec<String>,
}

impl Record {
    pub fn new<I, S>(line: usize, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            line,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// The word, if the record has any fields at all
    pub fn word(&self) -> Option<&str> {
        self.fields.first().map(String::as_str)
    }

    /// The numeric fields following the word
    pub fn values(&self) -> &[String] {
        self.fields.get(1..).unwrap_or(&[])
    }
}

/// Tokenize a single line. Blank lines yield `None`.
pub fn parse_line(line: usize, text: &str) -> Option<Record> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.is_empty() {
        None
    } else {
        Some(Record::new(line, fields))
    }
}

/// Iterate over the records of a buffered source, skipping blank lines.
pub fn records<R: BufRead>(reader: R) -> impl Iterator<Item = Result<Record>> {
    reader.lines().enumerate().filter_map(|(idx, text)| {
        let line = idx + 1;
        match text {
            Ok(text) => parse_line(line, &text).map(Ok),
            Err(source) => Some(Err(LexiconError::Io { line, source })),
        }
    })
}
