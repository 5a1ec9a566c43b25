//! Extractive text summarization.
//!
//! A document is split into sentences, each sentence is embedded by an
//! [`EmbeddingProvider`] the caller owns, and PageRank over the pairwise
//! similarity matrix picks the most central sentences. The top sentences come
//! back in reading order together with the similarity matrix.
//!
//! ```
//! use sentrank::{summarize, HashingEmbedder};
//!
//! let embedder = HashingEmbedder::default();
//! let text = "Rust is fast. Rust is safe. Cats are cute.";
//! let summary = summarize(&embedder, text, 2).unwrap();
//! assert_eq!(summary.top_sentences.len(), 2);
//! ```
//!
//! The [`nlp`] module also carries the vocabulary tooling used to prepare
//! training corpora: [`Tokenizer`], [`pad_sequences`] and stopword filtering.

/// Enter a tracing span for a summarizer stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
#[cfg(feature = "tracing")]
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::info_span!("summarizer_stage", stage = $name).entered();
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_stage {
    ($name:expr) => {
        let _ = $name;
    };
}

pub mod config;
pub mod corpus;
pub mod error;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod summarizer;

pub use config::{RankerConfig, SelectionConfig, SummarizerConfig};
pub use corpus::LabeledCorpus;
pub use error::{Error, Result};
pub use graph::similarity::SimilarityMatrix;
pub use nlp::sequences::{pad_sequences, PadPosition};
pub use nlp::stopwords::{remove_stopwords, StopwordFilter};
pub use nlp::tokenizer::{sentence_tokenize, tokenize, OovPolicy, Tokenizer, TokenizerConfig};
pub use pagerank::{page_rank, PageRankResult, StandardPageRank};
pub use summarizer::embedding::{EmbeddingProvider, HashingEmbedder};
pub use summarizer::extractor::{rank_sentences, summarize, Summarizer, Summary};
pub use summarizer::selector::{SelectedSentence, SentenceSelector};
