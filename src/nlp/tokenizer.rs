//! Word and sentence segmentation, plus frequency-ranked vocabulary building
//!
//! Words are maximal runs of letters, digits and underscores. Sentences end at
//! `.?!…` followed by whitespace or end of text, optionally wrapped in a single
//! opening/closing quote or bracket.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Characters that may open a quoted or bracketed sentence
const OPENERS: [char; 8] = ['"', '\'', '‘', '“', '[', '(', '{', '⟨'];
/// Characters that may close a quoted or bracketed sentence
const CLOSERS: [char; 8] = ['"', '\'', '’', '”', ']', ')', '}', '⟩'];
/// Sentence-final punctuation
const TERMINALS: [char; 4] = ['.', '?', '!', '…'];

/// Split text into raw-case word tokens.
///
/// Any maximal run of characters that is not alphanumeric or `_` is a
/// separator. Empty fragments are discarded.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split text into trimmed sentences.
///
/// Returns `None` when the text has no sentence-like structure at all (empty or
/// whitespace-only input). Callers must treat `None` as a failure, not as an
/// empty document.
pub fn sentence_tokenize(text: &str) -> Option<Vec<String>> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        match match_sentence(&chars, pos) {
            Some(end) => {
                let sentence: String = chars[pos..end].iter().collect();
                let trimmed = sentence.trim();
                if !trimmed.is_empty() {
                    sentences.push(trimmed.to_string());
                }
                pos = end;
            }
            None => pos += 1,
        }
    }

    if sentences.is_empty() {
        None
    } else {
        Some(sentences)
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn boundary_after(chars: &[char], pos: usize) -> bool {
    pos == chars.len() || chars[pos].is_whitespace()
}

/// Try to match one sentence starting exactly at `start`, returning its end.
fn match_sentence(chars: &[char], start: usize) -> Option<usize> {
    if start > 0 && !chars[start - 1].is_whitespace() {
        return None;
    }

    if OPENERS.contains(&chars[start]) {
        if let Some(end) = match_body(chars, start + 1) {
            return Some(end);
        }
    }
    match_body(chars, start)
}

/// Body alternatives: shortest run ending in a terminal, else the longest run
/// on the current line that ends on a boundary.
fn match_body(chars: &[char], start: usize) -> Option<usize> {
    let line_end = chars[start..]
        .iter()
        .position(|&c| is_line_terminator(c))
        .map_or(chars.len(), |offset| start + offset);

    for end in start..line_end {
        if TERMINALS.contains(&chars[end]) {
            if let Some(found) = match_tail(chars, end + 1) {
                return Some(found);
            }
        }
    }

    (start + 1..=line_end)
        .rev()
        .find_map(|end| match_tail(chars, end))
}

/// Trailing ` .`-style punctuation groups, an optional closer, then a boundary.
fn match_tail(chars: &[char], from: usize) -> Option<usize> {
    let mut stops = vec![from];
    let mut pos = from;
    while pos + 1 < chars.len() && chars[pos].is_whitespace() && TERMINALS.contains(&chars[pos + 1]) {
        pos += 2;
        stops.push(pos);
    }

    stops.into_iter().rev().find_map(|stop| {
        if stop < chars.len() && CLOSERS.contains(&chars[stop]) && boundary_after(chars, stop + 1) {
            Some(stop + 1)
        } else if boundary_after(chars, stop) {
            Some(stop)
        } else {
            None
        }
    })
}

/// What happens to words outside the usable vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum OovPolicy {
    /// Silently drop the word from the sequence
    #[default]
    Drop,
    /// Reserve index 1 for `token` and substitute it for every missing word
    Substitute { token: String },
}

/// Tokenizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Words whose index is `>= max_words` are treated as out of vocabulary.
    /// `None` disables the cutoff.
    pub max_words: Option<usize>,
    /// Out-of-vocabulary handling
    pub oov: OovPolicy,
}

/// Frequency-ranked vocabulary builder
///
/// Index 0 is reserved for padding. Indices are dense, starting at 1, ordered by
/// descending frequency with ties kept in first-encounter order. Counts
/// accumulate across [`fit_on_texts`](Self::fit_on_texts) calls; the index map
/// is rebuilt from the accumulated counts on every call.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
    /// Distinct words and their counts, in first-encounter order
    counts: Vec<(String, usize)>,
    /// Word -> position in `counts`
    positions: FxHashMap<String, usize>,
    /// Word -> vocabulary index
    index: FxHashMap<String, usize>,
}

impl Tokenizer {
    /// Create a tokenizer with the given configuration
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Convenience constructor mirroring the common `(max_words, oov_token)` setup
    pub fn with_limit(max_words: usize, oov_token: Option<&str>) -> Self {
        let oov = match oov_token {
            Some(token) => OovPolicy::Substitute {
                token: token.to_string(),
            },
            None => OovPolicy::Drop,
        };
        Self::new(TokenizerConfig {
            max_words: Some(max_words),
            oov,
        })
    }

    /// The configuration this tokenizer was built with
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Count lowercased words from every sentence and rebuild the index map.
    pub fn fit_on_texts<S: AsRef<str>>(&mut self, sentences: &[S]) {
        for sentence in sentences {
            for word in tokenize(sentence.as_ref()) {
                let word = word.to_lowercase();
                match self.positions.get(&word) {
                    Some(&pos) => self.counts[pos].1 += 1,
                    None => {
                        self.positions.insert(word.clone(), self.counts.len());
                        self.counts.push((word, 1));
                    }
                }
            }
        }
        self.rebuild_index();
    }

    fn rebuild_index(&mut self) {
        let mut ranked: Vec<&(String, usize)> = self.counts.iter().collect();
        // Stable: equal counts stay in first-encounter order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let oov_token = self.oov_token();
        let mut index = FxHashMap::with_capacity_and_hasher(ranked.len() + 1, Default::default());
        if let Some(token) = oov_token {
            index.insert(token.to_string(), 1);
        }
        for (word, _) in ranked {
            // The OOV slot owns its spelling even if the corpus contains it
            if oov_token == Some(word.as_str()) {
                continue;
            }
            let next = index.len() + 1;
            index.insert(word.clone(), next);
        }
        self.index = index;
    }

    fn oov_token(&self) -> Option<&str> {
        match &self.config.oov {
            OovPolicy::Substitute { token } => Some(token.as_str()),
            OovPolicy::Drop => None,
        }
    }

    fn oov_index(&self) -> Option<usize> {
        self.oov_token().and_then(|token| self.index.get(token).copied())
    }

    /// Convert each sentence to a sequence of vocabulary indices.
    ///
    /// A word is kept when its index exists and is below `max_words`. Otherwise
    /// the OOV index is substituted or the word is dropped, per [`OovPolicy`].
    pub fn texts_to_sequences<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<Vec<usize>> {
        let oov_index = self.oov_index();
        sentences
            .iter()
            .map(|sentence| {
                tokenize(sentence.as_ref())
                    .into_iter()
                    .filter_map(|word| {
                        let word = word.to_lowercase();
                        match self.index.get(&word) {
                            Some(&idx) if self.within_limit(idx) => Some(idx),
                            _ => oov_index,
                        }
                    })
                    .collect()
            })
            .collect()
    }

    fn within_limit(&self, idx: usize) -> bool {
        self.config.max_words.map_or(true, |max| idx < max)
    }

    /// Vocabulary index of a (lowercase) word
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Accumulated count of a (lowercase) word
    pub fn count_of(&self, word: &str) -> usize {
        self.positions
            .get(word)
            .map_or(0, |&pos| self.counts[pos].1)
    }

    /// Number of assigned indices, including the OOV slot
    pub fn vocabulary_len(&self) -> usize {
        self.index.len()
    }

    /// Snapshot of the index map, ordered by index
    pub fn word_index(&self) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> = self
            .index
            .iter()
            .map(|(word, &idx)| (word.clone(), idx))
            .collect();
        entries.sort_by_key(|(_, idx)| *idx);
        entries
    }

    /// Snapshot of the frequency table, in first-encounter order
    pub fn word_counts(&self) -> Vec<(String, usize)> {
        self.counts.clone()
    }

    /// `(rank, count)` pairs by descending count, rank starting at 1
    pub fn frequency_series(&self) -> Vec<(usize, usize)> {
        let mut counts: Vec<usize> = self.counts.iter().map(|(_, c)| *c).collect();
        counts.sort_unstable_by(|a, b| b.cmp(a));
        counts
            .into_iter()
            .enumerate()
            .map(|(i, c)| (i + 1, c))
            .collect()
    }
}
