//! Text-processing stages of the n-gram analysis.
//!
//! Each stage is a pure function over strings or token vectors:
//! decode, clean, tokenize, lemmatize, filter stopwords, build n-grams.

pub mod cleaner;
pub mod encoding;
pub mod lemmatizer;
pub mod ngrams;
pub mod stopwords;
pub mod tokenizer;

pub use cleaner::clean_text;
pub use encoding::{decode_corpus, TextEncoding};
pub use lemmatizer::{lemmatize, SuffixRules};
pub use ngrams::{count_and_filter, generate_ngrams, Ngram, NgramCount, NgramTable};
pub use stopwords::StopwordFilter;
pub use tokenizer::tokenize;
