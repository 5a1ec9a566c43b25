//! Stopword filtering for corpus preparation
//!
//! Lists come from the `stop-words` crate or from the classic English list
//! used for headline corpora. Matching is always on lowercase words.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use super::tokenizer::tokenize;

/// The classic English stopword list
pub const CLASSIC_ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don",
    "should", "now",
];

/// A set of lowercase stopwords
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl StopwordFilter {
    /// Stopwords for a language code or name, falling back to English
    ///
    /// Supported: en, de, fr, es, it, pt, nl, ru
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            _ => LANGUAGE::English,
        };
        Self {
            words: get(lang).iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// The classic English list ([`CLASSIC_ENGLISH`])
    pub fn classic_english() -> Self {
        Self::from_list(CLASSIC_ENGLISH)
    }

    /// A filter that removes nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn add_stopwords(&mut self, words: &[&str]) {
        self.words.extend(words.iter().map(|w| w.to_lowercase()));
    }

    /// Case-insensitive membership test
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Tokenize, lowercase, and drop stopwords, joining the rest with single spaces.
pub fn remove_stopwords(text: &str, filter: &StopwordFilter) -> String {
    tokenize(text)
        .into_iter()
        .map(str::to_lowercase)
        .filter(|w| !filter.words.contains(w))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_english() {
        let filter = StopwordFilter::classic_english();
        assert_eq!(filter.len(), CLASSIC_ENGLISH.len());
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("don"));
        assert!(!filter.is_stopword("granny"));
    }

    #[test]
    fn test_language_lists() {
        let en = StopwordFilter::for_language("en");
        assert!(en.is_stopword("the"));
        assert!(!en.is_stopword("machine"));

        let de = StopwordFilter::for_language("german");
        assert!(de.is_stopword("und"));
    }

    #[test]
    fn test_custom_and_empty() {
        let mut filter = StopwordFilter::from_list(&["Foo"]);
        assert!(filter.is_stopword("foo"));
        filter.add_stopwords(&["bar"]);
        assert!(filter.is_stopword("BAR"));

        assert!(StopwordFilter::empty().is_empty());
    }

    #[test]
    fn test_remove_stopwords() {
        let filter = StopwordFilter::classic_english();
        let cleaned = remove_stopwords("Granny starting to fear spiders in the garden!", &filter);
        assert_eq!(cleaned, "granny starting fear spiders garden");
    }

    #[test]
    fn test_remove_stopwords_empty_filter_only_normalizes() {
        let cleaned = remove_stopwords("Hello,   World", &StopwordFilter::empty());
        assert_eq!(cleaned, "hello world");
    }
}
