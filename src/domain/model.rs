use crate::text::{NgramTable, TextEncoding};
use serde::{Deserialize, Serialize};

/// A decoded corpus ready for preprocessing.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub source: String,
    pub text: String,
    pub encoding: TextEncoding,
}

/// Token counts after each preprocessing stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCounts {
    pub raw_chars: usize,
    pub clean_chars: usize,
    pub tokens: usize,
    pub lemmas: usize,
    pub filtered_tokens: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub source: String,
    pub encoding: TextEncoding,
    pub min_df: usize,
    pub stages: StageCounts,
    /// One table per configured n-gram size, in configuration order.
    pub tables: Vec<NgramTable>,
}

impl AnalysisResult {
    pub fn table(&self, n: usize) -> Option<&NgramTable> {
        self.tables.iter().find(|t| t.n == n)
    }
}
