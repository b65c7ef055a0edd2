//! Heuristic suffix-stripping lemmatizer for Spanish.
//!
//! This is not a real morphological analyzer: it folds the most common
//! plural, verb and feminine endings so that related word forms count
//! together. Each token goes through at most one rule.

use serde::{Deserialize, Serialize};

/// Exception lists for the suffix rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixRules {
    /// Words ending in `n` that keep their final letter.
    pub keep_final_n: Vec<String>,
    /// Words ending in `a` that are not folded to `o`.
    pub keep_final_a: Vec<String>,
}

impl Default for SuffixRules {
    fn default() -> Self {
        Self {
            keep_final_n: ["con", "sin", "tan", "bien"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            keep_final_a: ["la", "una"].iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SuffixRules {
    /// Reduce one token to its pseudo-lemma.
    ///
    /// Rules, first match wins:
    /// 1. trailing `s` on tokens longer than two characters is dropped
    /// 2. trailing `n` is dropped unless the token is an exception
    /// 3. trailing `a` becomes `o` unless the token is an exception
    pub fn lemma(&self, token: &str) -> String {
        if token.ends_with('s') && token.chars().count() > 2 {
            return drop_last_char(token).to_string();
        }
        if token.ends_with('n') && !self.keep_final_n.iter().any(|w| w == token) {
            return drop_last_char(token).to_string();
        }
        if token.ends_with('a') && !self.keep_final_a.iter().any(|w| w == token) {
            let mut lemma = drop_last_char(token).to_string();
            lemma.push('o');
            return lemma;
        }
        token.to_string()
    }

    pub fn lemmatize(&self, tokens: &[String]) -> Vec<String> {
        tokens.iter().map(|token| self.lemma(token)).collect()
    }
}

fn drop_last_char(token: &str) -> &str {
    match token.char_indices().next_back() {
        Some((idx, _)) => &token[..idx],
        None => token,
    }
}

/// Lemmatize with the default exception lists.
pub fn lemmatize(tokens: &[String]) -> Vec<String> {
    SuffixRules::default().lemmatize(tokens)
}
