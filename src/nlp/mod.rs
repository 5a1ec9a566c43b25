//! Natural Language Processing components
//!
//! This module provides word and sentence tokenization, vocabulary building,
//! sequence padding, and stopword filtering.

pub mod sequences;
pub mod stopwords;
pub mod tokenizer;
