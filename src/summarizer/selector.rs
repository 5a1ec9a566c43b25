//! Top-K sentence selection for summarization
//!
//! Sentences are chosen by descending rank score, then returned in document
//! order.

use serde::Serialize;

/// A selected sentence with its rank score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedSentence {
    /// Position of the sentence in the segmented document
    pub index: usize,
    /// The sentence text
    pub text: String,
    /// PageRank score
    pub score: f64,
}

/// Picks the `top_k` highest-scoring sentences
#[derive(Debug, Clone)]
pub struct SentenceSelector {
    top_k: usize,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self { top_k: 3 }
    }
}

impl SentenceSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of sentences to select
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Select sentences by score, returned ascending by index.
    ///
    /// Equal scores are broken by the stable sort, which keeps the lower index
    /// first. Callers should not rely on that order.
    pub fn select(&self, sentences: &[String], scores: &[f64]) -> Vec<SelectedSentence> {
        let mut ranked: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(self.top_k);

        // Sort by document order
        ranked.sort_by_key(|&(index, _)| index);

        ranked
            .into_iter()
            .filter_map(|(index, score)| {
                sentences.get(index).map(|text| SelectedSentence {
                    index,
                    text: text.clone(),
                    score,
                })
            })
            .collect()
    }
}
