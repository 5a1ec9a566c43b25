//! Error types shared by every stage of the summarizer.

use std::io;
use thiserror::Error;

/// Errors surfaced by segmentation, ranking, embedding, and configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// The input text has no sentence-like structure.
    #[error("text cannot be tokenized into sentences")]
    Segmentation,
    /// Power iteration used its whole budget without the delta dropping below the threshold.
    #[error("power iteration failed to converge after {iterations} iterations (delta {delta:e})")]
    NotConverged { iterations: usize, delta: f64 },
    /// A similarity matrix row whose length differs from the row count.
    #[error("similarity matrix is not square: {rows} rows but row {row} has {len} entries")]
    NonSquareMatrix { rows: usize, row: usize, len: usize },
    /// The embedding provider reported a failure.
    #[error("embedding failure: {0}")]
    Embedding(String),
    /// The embedding provider returned the wrong number of vectors.
    #[error("embedding provider returned {actual} vectors for {expected} sentences")]
    EmbeddingCount { expected: usize, actual: usize },
    /// Embedding vectors of differing dimension.
    #[error("embedding {index} has dimension {actual}, expected {expected}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        index: usize,
    },
    /// Every problem found while validating a configuration.
    #[error("invalid summarizer config: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),
    /// A malformed record in a JSON-lines corpus (1-based line number).
    #[error("corpus line {line}: {message}")]
    Corpus { line: usize, message: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_not_converged_mentions_iterations() {
        let err = Error::NotConverged {
            iterations: 100,
            delta: 0.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("100 iterations"));
        assert!(msg.contains("converge"));
    }

    #[test]
    fn error_invalid_config_lists_every_problem() {
        let err = Error::InvalidConfig(vec!["damping out of range".into(), "top_k is zero".into()]);
        let msg = err.to_string();
        assert!(msg.contains("damping out of range"));
        assert!(msg.contains("top_k is zero"));
    }

    #[test]
    fn error_non_square_matrix() {
        let err = Error::NonSquareMatrix {
            rows: 3,
            row: 1,
            len: 2,
        };
        assert!(err.to_string().contains("row 1 has 2 entries"));
    }

    #[test]
    fn error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing.json");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("io error"));
    }

    #[test]
    fn error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
