//! Sentence embedding providers
//!
//! The summarizer does not own a model. Callers construct a provider, lend it
//! to the summarizer, and release it by dropping it.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::error::Result;
use crate::nlp::tokenizer::tokenize;

/// Turns sentences into fixed-dimension vectors.
///
/// Implementations must return exactly one vector per input sentence, in input
/// order, all of the same dimension. Failures are reported as
/// [`Error::Embedding`](crate::Error::Embedding).
pub trait EmbeddingProvider {
    fn embed(&self, sentences: &[String]) -> Result<Vec<Vec<f32>>>;
}

/// Deterministic hashed bag-of-words embedder
///
/// Each lowercase word adds 1.0 to a bucket chosen by its hash; vectors are
/// L2-normalized so dot products are cosine similarities. Useful offline and
/// in tests where no model is available.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimensions: usize,
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self { dimensions: 256 }
    }
}

impl HashingEmbedder {
    /// An embedder producing `dimensions`-long vectors (at least 1)
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn embed_one(&self, sentence: &str) -> Vec<f32> {
        let mut v = vec![0f32; self.dimensions];
        for word in tokenize(sentence) {
            let mut hasher = FxHasher::default();
            word.to_lowercase().hash(&mut hasher);
            let bucket = (hasher.finish() % self.dimensions as u64) as usize;
            v[bucket] += 1.0;
        }
        l2_normalize_in_place(&mut v);
        v
    }
}

impl EmbeddingProvider for HashingEmbedder {
    fn embed(&self, sentences: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(sentences.iter().map(|s| self.embed_one(s)).collect())
    }
}

/// Scale to unit length; zero vectors are left as is
pub(crate) fn l2_normalize_in_place(v: &mut [f32]) {
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_one_vector_per_sentence() {
        let embedder = HashingEmbedder::new(32);
        let out = embedder
            .embed(&sentences(&["a b c", "d e", "no words here either"]))
            .unwrap();
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|v| v.len() == 32));
    }

    #[test]
    fn test_deterministic_and_case_insensitive() {
        let embedder = HashingEmbedder::default();
        let a = embedder.embed(&sentences(&["Rust is fast."])).unwrap();
        let b = embedder.embed(&sentences(&["rust IS fast"])).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unit_length() {
        let embedder = HashingEmbedder::new(16);
        let out = embedder.embed(&sentences(&["one two three two"])).unwrap();
        let norm: f32 = out[0].iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_no_words_gives_zero_vector() {
        let embedder = HashingEmbedder::new(8);
        let out = embedder.embed(&sentences(&["?!"])).unwrap();
        assert!(out[0].iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_zero_dimensions_clamped() {
        assert_eq!(HashingEmbedder::new(0).dimensions(), 1);
    }
}
