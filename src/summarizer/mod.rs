//! Summarization components
//!
//! Provides extractive summarization: sentences are embedded by a
//! caller-supplied provider, ranked by PageRank over their similarity graph,
//! and the most central ones are returned in reading order.

pub mod embedding;
pub mod extractor;
pub mod selector;
