use crate::config::{TomlConfig, DEFAULT_CORPUS_PATH, DEFAULT_OUTPUT_PATH};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "corpus-ngrams")]
#[command(about = "Bigram and trigram frequency analysis for Spanish text corpora")]
pub struct CliConfig {
    /// Corpus text file [default: CorpusEducacion.txt]
    #[arg(long)]
    pub corpus: Option<String>,

    /// Directory for tables, chart and bundle [default: ./output]
    #[arg(long)]
    pub output_path: Option<String>,

    /// Minimum frequency an n-gram needs to be reported
    #[arg(long, default_value = "2")]
    pub min_df: usize,

    /// Number of n-grams drawn per chart panel
    #[arg(long, default_value = "15")]
    pub top_n: usize,

    #[arg(long, value_delimiter = ',', default_values = ["2", "3"])]
    pub ngram_sizes: Vec<usize>,

    /// Encodings tried in order when decoding the corpus
    #[arg(long, value_delimiter = ',', default_values = ["utf-8", "latin-1", "cp1252"])]
    pub encodings: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    pub extra_stopwords: Vec<String>,

    /// Only use the extra stopwords, skipping the built-in Spanish list
    #[arg(long)]
    pub no_builtin_stopwords: bool,

    /// Bundle all outputs into ngram_report.zip
    #[arg(long)]
    pub zip: bool,

    /// Load settings from a TOML file instead of flags
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            corpus: None,
            output_path: None,
            min_df: crate::config::DEFAULT_MIN_DF,
            top_n: crate::config::DEFAULT_TOP_N,
            ngram_sizes: crate::config::DEFAULT_NGRAM_SIZES.to_vec(),
            encodings: crate::config::default_encodings(),
            extra_stopwords: Vec::new(),
            no_builtin_stopwords: false,
            zip: false,
            config: None,
            verbose: false,
            monitor: false,
            log_json: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn corpus_path(&self) -> &str {
        self.corpus.as_deref().unwrap_or(DEFAULT_CORPUS_PATH)
    }

    fn output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn encodings(&self) -> &[String] {
        &self.encodings
    }

    fn min_df(&self) -> usize {
        self.min_df
    }

    fn ngram_sizes(&self) -> &[usize] {
        &self.ngram_sizes
    }

    fn top_n(&self) -> usize {
        self.top_n
    }

    fn extra_stopwords(&self) -> &[String] {
        &self.extra_stopwords
    }

    fn use_builtin_stopwords(&self) -> bool {
        !self.no_builtin_stopwords
    }

    fn zip_output(&self) -> bool {
        self.zip
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("corpus", self.corpus_path())?;
        validation::validate_path("output_path", self.output_path())?;
        validation::validate_positive_number("min_df", self.min_df, 1)?;
        validation::validate_positive_number("top_n", self.top_n, 1)?;
        validation::validate_ngram_sizes("ngram_sizes", &self.ngram_sizes)?;
        validation::validate_encodings("encodings", &self.encodings)?;
        for word in &self.extra_stopwords {
            validation::validate_non_empty_string("extra_stopwords", word)?;
        }
        Ok(())
    }
}

/// Apply the flags that take effect together with `--config`.
///
/// `--corpus`, `--output-path` and `--zip` win over the file. Every other
/// analysis flag is ignored in favor of the file; each one that was set to a
/// non-default value is logged and returned by name.
pub fn apply_cli_overrides(config: &mut TomlConfig, cli: &CliConfig) -> Vec<&'static str> {
    if let Some(corpus) = &cli.corpus {
        config.corpus.path = corpus.clone();
    }
    if let Some(output_path) = &cli.output_path {
        config.output.path = output_path.clone();
    }
    if cli.zip {
        config.output.zip = true;
    }

    let defaults = CliConfig::default();
    let mut ignored = Vec::new();
    if cli.min_df != defaults.min_df {
        ignored.push("--min-df");
    }
    if cli.top_n != defaults.top_n {
        ignored.push("--top-n");
    }
    if cli.ngram_sizes != defaults.ngram_sizes {
        ignored.push("--ngram-sizes");
    }
    if cli.encodings != defaults.encodings {
        ignored.push("--encodings");
    }
    if cli.extra_stopwords != defaults.extra_stopwords {
        ignored.push("--extra-stopwords");
    }
    if cli.no_builtin_stopwords != defaults.no_builtin_stopwords {
        ignored.push("--no-builtin-stopwords");
    }

    for flag in &ignored {
        tracing::warn!(
            "⚠️ {} is ignored when --config is given; set it in the TOML file instead",
            flag
        );
    }
    ignored
}
