//! Standard PageRank algorithm
//!
//! Implements the classic PageRank with power iteration and proper
//! handling of dangling nodes. Rank held by dangling nodes is spread
//! uniformly over every node on each iteration.

use super::PageRankResult;
use crate::error::{Error, Result};
use crate::graph::csr::CsrGraph;
use crate::graph::similarity::SimilarityMatrix;

/// Standard PageRank implementation
#[derive(Debug, Clone, PartialEq)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 delta between iterations
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-5,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Rank a similarity matrix (the diagonal is ignored)
    pub fn rank_matrix(&self, matrix: &SimilarityMatrix) -> Result<PageRankResult> {
        self.run(&CsrGraph::from_matrix(matrix))
    }

    /// Run PageRank on a graph
    ///
    /// Stops as soon as the L1 delta drops below the threshold. Exhausting
    /// `max_iterations` is an error; no partial scores are returned.
    pub fn run(&self, graph: &CsrGraph) -> Result<PageRankResult> {
        let n = graph.num_nodes;
        if n == 0 {
            return Ok(PageRankResult::new(vec![], 0, 0.0));
        }

        // Initialize scores uniformly
        let uniform = 1.0 / n as f64;
        let mut scores = vec![uniform; n];
        let mut new_scores = vec![0.0; n];

        let dangling_nodes = graph.dangling_nodes();
        let teleport = (1.0 - self.damping) * uniform;
        let mut delta = f64::INFINITY;

        for iteration in 1..=self.max_iterations {
            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d as usize]).sum();
            new_scores.fill(teleport + self.damping * dangling_mass * uniform);

            // Propagate scores through normalized edges
            for (node, &node_score) in scores.iter().enumerate() {
                for (neighbor, probability) in graph.transition(node as u32) {
                    new_scores[neighbor as usize] += self.damping * node_score * probability;
                }
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);

            if delta < self.threshold {
                #[cfg(feature = "tracing")]
                tracing::debug!(nodes = n, iterations = iteration, delta, "pagerank converged");
                return Ok(PageRankResult::new(scores, iteration, delta));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(
            nodes = n,
            iterations = self.max_iterations,
            delta,
            "pagerank failed to converge"
        );
        Err(Error::NotConverged {
            iterations: self.max_iterations,
            delta,
        })
    }
}
