//! Spanish stopword filtering
//!
//! The built-in list is NLTK's Spanish list, shipped by the `stop-words`
//! crate under its `nltk` feature. It is extended with frequent verbs,
//! contractions and possessives that survive lemmatization.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Words removed on top of the built-in Spanish list.
pub const EXTRA_SPANISH_STOPWORDS: &[&str] = &[
    "ser", "estar", "hacer", "tener", "poder", "querer", "deber", "ir", "venir", "decir", "ver",
    "dar", "saber", "parecer", "hay", "es", "son", "del", "al", "se", "lo", "que", "más", "un",
    "una", "unos", "unas", "mi", "mis", "tu", "tus", "su", "sus",
];

/// A filter for removing stopwords and single-letter tokens
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
    /// Tokens with this many characters or fewer are always dropped.
    min_len: usize,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::spanish()
    }
}

impl StopwordFilter {
    /// Built-in Spanish list plus [`EXTRA_SPANISH_STOPWORDS`]
    pub fn spanish() -> Self {
        let mut filter = Self::builtin_only();
        filter.add_stopwords(EXTRA_SPANISH_STOPWORDS);
        filter
    }

    /// Built-in Spanish list without the extras
    pub fn builtin_only() -> Self {
        Self {
            stopwords: get(LANGUAGE::Spanish).iter().map(|s| s.to_string()).collect(),
            min_len: 1,
        }
    }

    /// Create a filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
            min_len: 1,
        }
    }

    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Whether a token survives filtering.
    pub fn keeps(&self, token: &str) -> bool {
        !self.is_stopword(token) && token.chars().count() > self.min_len
    }

    /// Drop stopwords and too-short tokens, preserving order.
    pub fn filter(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|token| self.keeps(token))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
