//! Compressed Sparse Row (CSR) transition graph
//!
//! CSR is optimized for iteration over neighbors, which is exactly what
//! PageRank needs during power iteration. Sentence similarity matrices are
//! often dense, but zero entries (and every self-loop) are skipped.

use super::similarity::SimilarityMatrix;

/// A weighted directed graph in Compressed Sparse Row format
///
/// Node `i`'s outgoing edges are at `row_ptr[i]..row_ptr[i + 1]`. Edge weights
/// are the raw similarities; [`transition`](Self::transition) gives the
/// row-normalized view.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (target nodes) for each edge
    pub col_idx: Vec<u32>,
    /// Edge weights
    pub weights: Vec<f64>,
    /// Total outgoing weight for each node
    pub total_weight: Vec<f64>,
}

impl CsrGraph {
    /// Build from a similarity matrix, dropping the diagonal
    pub fn from_matrix(matrix: &SimilarityMatrix) -> Self {
        let num_nodes = matrix.len();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut total_weight = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for (i, row) in matrix.rows().iter().enumerate() {
            let mut sum = 0.0;
            for (j, &w) in row.iter().enumerate() {
                if i == j || w == 0.0 {
                    continue;
                }
                col_idx.push(j as u32);
                weights.push(w);
                sum += w;
            }
            total_weight.push(sum);
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            total_weight,
        }
    }

    /// Iterate over `(target, weight)` edges of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Iterate over `(target, probability)`: weights divided by the row total.
    ///
    /// Empty for dangling nodes.
    pub fn transition(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let total = self.total_weight[node as usize];
        let dangling = self.is_dangling(node);
        self.neighbors(node)
            .filter(move |_| !dangling)
            .map(move |(j, w)| (j, w / total))
    }

    /// Number of stored outgoing edges
    pub fn degree(&self, node: u32) -> usize {
        self.row_ptr[node as usize + 1] - self.row_ptr[node as usize]
    }

    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    /// A node is dangling when its outgoing weights sum to zero
    pub fn is_dangling(&self, node: u32) -> bool {
        self.total_weight[node as usize] == 0.0
    }

    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// All dangling nodes, ascending
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.is_dangling(n))
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> SimilarityMatrix {
        SimilarityMatrix::new(rows).unwrap()
    }

    #[test]
    fn test_csr_conversion_skips_diagonal_and_zeros() {
        let csr = CsrGraph::from_matrix(&matrix(vec![
            vec![1.0, 0.5, 0.0],
            vec![0.5, 1.0, 2.0],
            vec![0.0, 2.0, 1.0],
        ]));

        assert_eq!(csr.num_nodes, 3);
        assert_eq!(csr.num_edges(), 4);
        assert_eq!(csr.neighbors(0).collect::<Vec<_>>(), vec![(1, 0.5)]);
        assert_eq!(csr.degree(1), 2);
        assert!((csr.node_total_weight(1) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_transition_rows_sum_to_one() {
        let csr = CsrGraph::from_matrix(&matrix(vec![
            vec![0.0, 1.0, 3.0],
            vec![1.0, 0.0, 1.0],
            vec![3.0, 1.0, 0.0],
        ]));

        for node in 0..3 {
            let total: f64 = csr.transition(node).map(|(_, p)| p).sum();
            assert!((total - 1.0).abs() < 1e-12);
        }
        let probs: Vec<_> = csr.transition(0).collect();
        assert_eq!(probs, vec![(1, 0.25), (2, 0.75)]);
    }

    #[test]
    fn test_dangling_nodes() {
        let csr = CsrGraph::from_matrix(&matrix(vec![
            vec![0.0, 1.0, 0.0],
            vec![0.0, 7.0, 0.0],
            vec![0.5, -0.5, 0.0],
        ]));

        // Row 1 has only a self-loop; row 2 cancels out to zero
        assert_eq!(csr.dangling_nodes(), vec![1, 2]);
        assert_eq!(csr.transition(2).count(), 0);
        assert_eq!(csr.degree(2), 2);
    }

    #[test]
    fn test_empty_graph() {
        let csr = CsrGraph::from_matrix(&SimilarityMatrix::default());
        assert!(csr.is_empty());
        assert_eq!(csr.num_edges(), 0);
        assert!(CsrGraph::default().dangling_nodes().is_empty());
    }
}
