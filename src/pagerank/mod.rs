//! PageRank over sentence similarity graphs
//!
//! This module provides the power-iteration ranker and its result type.

pub mod standard;

use crate::error::Result;
use crate::graph::similarity::SimilarityMatrix;

pub use standard::StandardPageRank;

/// Result of a converged PageRank computation
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta (L1)
    pub delta: f64,
}

impl PageRankResult {
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64) -> Self {
        Self {
            scores,
            iterations,
            delta,
        }
    }

    /// Top N nodes by descending score.
    ///
    /// The sort is stable, so equal scores keep ascending node order.
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as u32, s))
            .collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
        indexed.truncate(n);
        indexed
    }

    /// Score for a node, 0.0 when out of range
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }

    pub fn into_scores(self) -> Vec<f64> {
        self.scores
    }
}

/// Rank a similarity matrix with the default damping (0.85), iteration cap
/// (100) and threshold (1e-5).
///
/// Returns an empty vector for an empty matrix and
/// [`Error::NotConverged`](crate::Error::NotConverged) when iteration does
/// not settle.
pub fn page_rank(matrix: &SimilarityMatrix) -> Result<Vec<f64>> {
    StandardPageRank::default()
        .rank_matrix(matrix)
        .map(PageRankResult::into_scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n_orders_by_score() {
        let result = PageRankResult::new(vec![0.1, 0.5, 0.2, 0.2], 3, 0.0);
        assert_eq!(result.top_n(3), vec![(1, 0.5), (2, 0.2), (3, 0.2)]);
        assert_eq!(result.top_n(10).len(), 4);
    }

    #[test]
    fn test_score_out_of_range() {
        let result = PageRankResult::new(vec![0.4, 0.6], 1, 0.0);
        assert_eq!(result.score(1), 0.6);
        assert_eq!(result.score(9), 0.0);
    }

    #[test]
    fn test_page_rank_empty() {
        let scores = page_rank(&SimilarityMatrix::default()).unwrap();
        assert!(scores.is_empty());
    }
}
