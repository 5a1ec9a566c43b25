//! Full-text to summary orchestration
//!
//! Stages run in order: segment, embed, similarity, rank, select. Any stage
//! failure is returned to the caller as is.

use serde::Serialize;

use super::embedding::EmbeddingProvider;
use super::selector::{SelectedSentence, SentenceSelector};
use crate::config::SummarizerConfig;
use crate::error::{Error, Result};
use crate::graph::similarity::SimilarityMatrix;
use crate::nlp::tokenizer::sentence_tokenize;
use crate::pagerank::StandardPageRank;

const STAGE_SEGMENT: &str = "segment";
const STAGE_EMBED: &str = "embed";
const STAGE_SIMILARITY: &str = "similarity";
const STAGE_RANK: &str = "rank";
const STAGE_SELECT: &str = "select";

/// Output of one summarization request
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Pairwise sentence similarities, as produced before ranking
    pub similarity_matrix: SimilarityMatrix,
    /// Selected sentences, ascending by original index
    pub top_sentences: Vec<SelectedSentence>,
    /// Power iterations the ranker needed
    pub iterations: usize,
}

impl Summary {
    /// `(original index, text)` pairs in reading order
    pub fn pairs(&self) -> Vec<(usize, &str)> {
        self.top_sentences
            .iter()
            .map(|s| (s.index, s.text.as_str()))
            .collect()
    }

    /// Selected sentences joined with single spaces
    pub fn text(&self) -> String {
        self.top_sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Extractive summarizer borrowing a caller-owned embedding provider
#[derive(Debug)]
pub struct Summarizer<'e, E: ?Sized> {
    embedder: &'e E,
    ranker: StandardPageRank,
    selector: SentenceSelector,
}

impl<'e, E: EmbeddingProvider + ?Sized> Summarizer<'e, E> {
    /// Default ranker and `top_k = 3`
    pub fn new(embedder: &'e E) -> Self {
        Self {
            embedder,
            ranker: StandardPageRank::default(),
            selector: SentenceSelector::default(),
        }
    }

    /// Build from a validated configuration
    pub fn from_config(embedder: &'e E, cfg: &SummarizerConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            embedder,
            ranker: StandardPageRank::from(&cfg.ranker),
            selector: SentenceSelector::new().with_top_k(cfg.selection.top_k),
        })
    }

    pub fn with_ranker(mut self, ranker: StandardPageRank) -> Self {
        self.ranker = ranker;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.selector = self.selector.with_top_k(top_k);
        self
    }

    /// Summarize with the configured `top_k`
    pub fn summarize(&self, text: &str) -> Result<Summary> {
        self.summarize_top(text, self.selector.top_k())
    }

    /// Summarize, selecting `top_k` sentences
    pub fn summarize_top(&self, text: &str, top_k: usize) -> Result<Summary> {
        trace_stage!(STAGE_SEGMENT);
        let sentences = sentence_tokenize(text).ok_or(Error::Segmentation)?;

        trace_stage!(STAGE_EMBED);
        let embeddings = self.embedder.embed(&sentences)?;
        if embeddings.len() != sentences.len() {
            return Err(Error::EmbeddingCount {
                expected: sentences.len(),
                actual: embeddings.len(),
            });
        }

        trace_stage!(STAGE_SIMILARITY);
        let matrix = SimilarityMatrix::from_embeddings(&embeddings)?;
        drop(embeddings);

        rank_sentences(&self.ranker, sentences, matrix, top_k)
    }
}

/// Rank pre-segmented sentences against a precomputed similarity matrix.
///
/// `sentences[i]` must describe row `i` of `matrix`.
pub fn rank_sentences(
    ranker: &StandardPageRank,
    sentences: Vec<String>,
    matrix: SimilarityMatrix,
    top_k: usize,
) -> Result<Summary> {
    if sentences.len() != matrix.len() {
        return Err(Error::EmbeddingCount {
            expected: sentences.len(),
            actual: matrix.len(),
        });
    }

    trace_stage!(STAGE_RANK);
    let ranks = ranker.rank_matrix(&matrix)?;

    trace_stage!(STAGE_SELECT);
    let top_sentences = SentenceSelector::new()
        .with_top_k(top_k)
        .select(&sentences, &ranks.scores);

    Ok(Summary {
        similarity_matrix: matrix,
        top_sentences,
        iterations: ranks.iterations,
    })
}

/// Summarize `text` into its `top_k` most central sentences using default
/// ranking parameters.
pub fn summarize<E: EmbeddingProvider + ?Sized>(
    embedder: &E,
    text: &str,
    top_k: usize,
) -> Result<Summary> {
    Summarizer::new(embedder).summarize_top(text, top_k)
}
