//! Dense sentence-similarity matrices
//!
//! Entry `(i, j)` is the similarity between sentence `i` and sentence `j`.
//! Matrices are validated square on construction and are not required to be
//! symmetric.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Row count from which embedding products are computed in parallel
const PARALLEL_ROWS: usize = 64;

/// A square `N x N` similarity matrix
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct SimilarityMatrix {
    rows: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    /// Wrap rows, rejecting any row whose length differs from the row count
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(Error::NonSquareMatrix {
                rows: n,
                row,
                len: r.len(),
            });
        }
        Ok(Self { rows })
    }

    /// Pairwise dot products of every embedding against every other.
    ///
    /// For unit-length embeddings this is cosine similarity. All embeddings
    /// must share one dimension.
    pub fn from_embeddings(embeddings: &[Vec<f32>]) -> Result<Self> {
        if let Some(first) = embeddings.first() {
            let expected = first.len();
            if let Some((index, e)) = embeddings
                .iter()
                .enumerate()
                .find(|(_, e)| e.len() != expected)
            {
                return Err(Error::DimensionMismatch {
                    expected,
                    actual: e.len(),
                    index,
                });
            }
        }

        let row = |a: &Vec<f32>| -> Vec<f64> { embeddings.iter().map(|b| dot(a, b)).collect() };
        let rows = if embeddings.len() < PARALLEL_ROWS {
            embeddings.iter().map(row).collect()
        } else {
            embeddings.par_iter().map(row).collect()
        };
        Ok(Self { rows })
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Entry `(i, j)`; panics when out of bounds
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Return a copy with every `(i, i)` entry set to zero
    pub fn without_self_loops(&self) -> Self {
        let mut rows = self.rows.clone();
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = 0.0;
        }
        Self { rows }
    }

    /// `sum_j M[i][j]` for every row
    pub fn row_sums(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.iter().sum()).collect()
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }
}

impl TryFrom<Vec<Vec<f64>>> for SimilarityMatrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<SimilarityMatrix> for Vec<Vec<f64>> {
    fn from(matrix: SimilarityMatrix) -> Self {
        matrix.rows
    }
}

fn dot(a: &[f32], b: &[f32]) -> f64 {
    a.iter().zip(b).map(|(&x, &y)| x as f64 * y as f64).sum()
}
