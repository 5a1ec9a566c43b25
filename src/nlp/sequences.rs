//! Fixed-length sequence normalization
//!
//! Pads short index sequences with zeros and truncates long ones, each from
//! either end.

use serde::{Deserialize, Serialize};

/// Which end of a sequence padding or truncation applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PadPosition {
    /// Front of the sequence: truncation keeps the tail, padding is prepended
    Pre,
    /// Back of the sequence: truncation keeps the head, padding is appended
    #[default]
    Post,
}

/// Normalize every sequence to exactly `max_len` elements.
///
/// Sequences already `max_len` long are returned unchanged.
pub fn pad_sequences(
    sequences: &[Vec<usize>],
    max_len: usize,
    truncating: PadPosition,
    padding: PadPosition,
) -> Vec<Vec<usize>> {
    sequences
        .iter()
        .map(|seq| pad_sequence(seq, max_len, truncating, padding))
        .collect()
}

fn pad_sequence(
    seq: &[usize],
    max_len: usize,
    truncating: PadPosition,
    padding: PadPosition,
) -> Vec<usize> {
    if seq.len() > max_len {
        return match truncating {
            PadPosition::Pre => seq[seq.len() - max_len..].to_vec(),
            PadPosition::Post => seq[..max_len].to_vec(),
        };
    }

    let fill = max_len - seq.len();
    let mut out = Vec::with_capacity(max_len);
    match padding {
        PadPosition::Pre => {
            out.resize(fill, 0);
            out.extend_from_slice(seq);
        }
        PadPosition::Post => {
            out.extend_from_slice(seq);
            out.resize(max_len, 0);
        }
    }
    out
}
