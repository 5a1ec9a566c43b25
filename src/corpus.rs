//! Labeled headline corpora in JSON-lines form
//!
//! One record per line: `{"headline": "...", "is_sarcastic": 0}`. Headlines are
//! cleaned with [`remove_stopwords`] as they are read, ready to feed
//! [`Tokenizer::fit_on_texts`](crate::Tokenizer::fit_on_texts).

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::nlp::stopwords::{remove_stopwords, StopwordFilter};

#[derive(Debug, Deserialize)]
struct HeadlineRecord {
    headline: String,
    is_sarcastic: u8,
}

/// Cleaned sentences with one label each
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabeledCorpus {
    pub sentences: Vec<String>,
    pub labels: Vec<u8>,
}

impl LabeledCorpus {
    /// Parse JSON lines, skipping blank lines
    pub fn from_json_lines(input: &str, stopwords: &StopwordFilter) -> Result<Self> {
        let mut corpus = Self::default();
        for (i, line) in input.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record: HeadlineRecord =
                serde_json::from_str(line).map_err(|e| Error::Corpus {
                    line: i + 1,
                    message: e.to_string(),
                })?;
            corpus
                .sentences
                .push(remove_stopwords(&record.headline, stopwords));
            corpus.labels.push(record.is_sarcastic);
        }
        Ok(corpus)
    }

    pub fn from_path(path: impl AsRef<Path>, stopwords: &StopwordFilter) -> Result<Self> {
        let input = fs::read_to_string(path)?;
        Self::from_json_lines(&input, stopwords)
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// The first `train` records and the `test` records after them, both
    /// clamped to what is available.
    pub fn split(&self, train: usize, test: usize) -> (LabeledCorpus, LabeledCorpus) {
        let train_end = train.min(self.len());
        let test_end = train_end.saturating_add(test).min(self.len());
        (self.slice(0, train_end), self.slice(train_end, test_end))
    }

    fn slice(&self, start: usize, end: usize) -> LabeledCorpus {
        LabeledCorpus {
            sentences: self.sentences[start..end].to_vec(),
            labels: self.labels[start..end].to_vec(),
        }
    }
}
