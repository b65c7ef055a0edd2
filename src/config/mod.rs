#[cfg(feature = "cli")]
pub mod cli;
pub mod storage;
pub mod toml_config;

pub const DEFAULT_CORPUS_PATH: &str = "CorpusEducacion.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_MIN_DF: usize = 2;
pub const DEFAULT_TOP_N: usize = 15;
pub const DEFAULT_NGRAM_SIZES: [usize; 2] = [2, 3];

pub fn default_encodings() -> Vec<String> {
    crate::text::TextEncoding::DEFAULT_ORDER
        .iter()
        .map(|e| e.label().to_string())
        .collect()
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use storage::LocalStorage;
pub use toml_config::TomlConfig;
