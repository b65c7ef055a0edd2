//! N-gram generation and frequency counting.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A contiguous sequence of tokens.
pub type Ngram = Vec<String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgramCount {
    pub ngram: Ngram,
    pub count: usize,
}

impl NgramCount {
    /// Words joined by a single space, as shown in tables and charts.
    pub fn label(&self) -> String {
        self.ngram.join(" ")
    }
}

/// Frequencies of n-grams of one size that reached `min_df`.
///
/// Entries are kept in order of first appearance in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgramTable {
    pub n: usize,
    pub min_df: usize,
    pub entries: Vec<NgramCount>,
}

impl NgramTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, words: &[&str]) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.ngram.iter().map(String::as_str).eq(words.iter().copied()))
            .map(|e| e.count)
    }

    /// The `k` most frequent entries, ties broken by first appearance.
    pub fn top(&self, k: usize) -> Vec<&NgramCount> {
        let mut sorted: Vec<&NgramCount> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted.truncate(k);
        sorted
    }
}

/// All windows of `n` consecutive tokens.
pub fn generate_ngrams(tokens: &[String], n: usize) -> Vec<Ngram> {
    if n == 0 {
        return Vec::new();
    }
    tokens.windows(n).map(|w| w.to_vec()).collect()
}

/// Count n-grams and keep those appearing at least `min_df` times.
pub fn count_and_filter(ngrams: Vec<Ngram>, n: usize, min_df: usize) -> NgramTable {
    let mut index: FxHashMap<Ngram, usize> = FxHashMap::default();
    let mut counts: Vec<NgramCount> = Vec::new();

    for ngram in ngrams {
        match index.get(&ngram) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(ngram.clone(), counts.len());
                counts.push(NgramCount { ngram, count: 1 });
            }
        }
    }

    let distinct = counts.len();
    counts.retain(|entry| entry.count >= min_df);
    tracing::debug!(
        "{}-grams: {} distinct, {} with frequency >= {}",
        n,
        distinct,
        counts.len(),
        min_df
    );

    NgramTable {
        n,
        min_df,
        entries: counts,
    }
}
