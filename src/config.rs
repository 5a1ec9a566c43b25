//! Summarizer configuration.
//!
//! Every section has defaults, so a partial JSON document is enough:
//!
//! ```json
//! {
//!   "ranker": { "damping": 0.85, "max_iterations": 100, "threshold": 1e-5 },
//!   "selection": { "top_k": 3 },
//!   "tokenizer": { "max_words": 2000, "oov": { "policy": "substitute", "token": "<OOV>" } }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::nlp::tokenizer::{OovPolicy, TokenizerConfig};
use crate::pagerank::StandardPageRank;

/// Power-iteration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankerConfig {
    /// Probability of following an edge instead of teleporting
    pub damping: f64,
    /// Iterations allowed before ranking fails
    pub max_iterations: usize,
    /// L1 delta below which iteration stops
    pub threshold: f64,
}

impl Default for RankerConfig {
    fn default() -> Self {
        let pr = StandardPageRank::default();
        Self {
            damping: pr.damping,
            max_iterations: pr.max_iterations,
            threshold: pr.threshold,
        }
    }
}

impl From<&RankerConfig> for StandardPageRank {
    fn from(cfg: &RankerConfig) -> Self {
        StandardPageRank::new()
            .with_damping(cfg.damping)
            .with_max_iterations(cfg.max_iterations)
            .with_threshold(cfg.threshold)
    }
}

/// Summary selection parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Number of sentences in the summary
    pub top_k: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self { top_k: 3 }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    pub ranker: RankerConfig,
    pub selection: SelectionConfig,
    pub tokenizer: TokenizerConfig,
}

impl SummarizerConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check every field, reporting all problems at once
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        let damping = self.ranker.damping;
        if !(damping > 0.0 && damping < 1.0) {
            problems.push(format!("ranker.damping must be in (0, 1), got {damping}"));
        }
        if self.ranker.max_iterations == 0 {
            problems.push("ranker.max_iterations must be at least 1".to_string());
        }
        let threshold = self.ranker.threshold;
        if !(threshold.is_finite() && threshold > 0.0) {
            problems.push(format!(
                "ranker.threshold must be positive and finite, got {threshold}"
            ));
        }
        if self.selection.top_k == 0 {
            problems.push("selection.top_k must be at least 1".to_string());
        }
        if self.tokenizer.max_words == Some(0) {
            problems.push("tokenizer.max_words must be at least 1".to_string());
        }
        if let OovPolicy::Substitute { token } = &self.tokenizer.oov {
            if token.is_empty() {
                problems.push("tokenizer.oov.token must not be empty".to_string());
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidConfig(problems))
        }
    }
}
