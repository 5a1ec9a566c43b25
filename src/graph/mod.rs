//! Graph construction and representation
//!
//! This module turns sentence similarities into the weighted graph the
//! ranker iterates over.

pub mod csr;
pub mod similarity;
