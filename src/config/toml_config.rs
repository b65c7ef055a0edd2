use crate::config::{
    default_encodings, DEFAULT_CORPUS_PATH, DEFAULT_MIN_DF, DEFAULT_NGRAM_SIZES,
    DEFAULT_OUTPUT_PATH, DEFAULT_TOP_N,
};
use crate::core::ConfigProvider;
use crate::text::SuffixRules;
use crate::utils::error::{AnalysisError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub preprocess: PreprocessConfig,
    #[serde(default)]
    pub ngrams: NgramConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    #[serde(default = "default_corpus_path")]
    pub path: String,
    #[serde(default = "default_encodings")]
    pub encodings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessConfig {
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
    #[serde(default = "default_true")]
    pub builtin_stopwords: bool,
    /// Overrides for the lemmatizer's exception lists.
    pub keep_final_n: Option<Vec<String>>,
    pub keep_final_a: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NgramConfig {
    #[serde(default = "default_ngram_sizes")]
    pub sizes: Vec<usize>,
    #[serde(default = "default_min_df")]
    pub min_df: usize,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    pub console_top: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
    #[serde(default)]
    pub zip: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

fn default_corpus_path() -> String {
    DEFAULT_CORPUS_PATH.to_string()
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_ngram_sizes() -> Vec<usize> {
    DEFAULT_NGRAM_SIZES.to_vec()
}

fn default_min_df() -> usize {
    DEFAULT_MIN_DF
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_true() -> bool {
    true
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_corpus_path(),
            encodings: default_encodings(),
        }
    }
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            extra_stopwords: Vec::new(),
            builtin_stopwords: true,
            keep_final_n: None,
            keep_final_a: None,
        }
    }
}

impl Default for NgramConfig {
    fn default() -> Self {
        Self {
            sizes: default_ngram_sizes(),
            min_df: DEFAULT_MIN_DF,
            top_n: DEFAULT_TOP_N,
            console_top: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            zip: false,
        }
    }
}

impl TomlConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AnalysisError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AnalysisError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn corpus_path(&self) -> &str {
        &self.corpus.path
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn encodings(&self) -> &[String] {
        &self.corpus.encodings
    }

    fn min_df(&self) -> usize {
        self.ngrams.min_df
    }

    fn ngram_sizes(&self) -> &[usize] {
        &self.ngrams.sizes
    }

    fn top_n(&self) -> usize {
        self.ngrams.top_n
    }

    fn console_top(&self) -> usize {
        self.ngrams.console_top.unwrap_or(15)
    }

    fn extra_stopwords(&self) -> &[String] {
        &self.preprocess.extra_stopwords
    }

    fn use_builtin_stopwords(&self) -> bool {
        self.preprocess.builtin_stopwords
    }

    fn suffix_rules(&self) -> SuffixRules {
        let defaults = SuffixRules::default();
        SuffixRules {
            keep_final_n: self
                .preprocess
                .keep_final_n
                .clone()
                .unwrap_or(defaults.keep_final_n),
            keep_final_a: self
                .preprocess
                .keep_final_a
                .clone()
                .unwrap_or(defaults.keep_final_a),
        }
    }

    fn zip_output(&self) -> bool {
        self.output.zip
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("corpus.path", &self.corpus.path)?;
        validation::validate_encodings("corpus.encodings", &self.corpus.encodings)?;
        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_ngram_sizes("ngrams.sizes", &self.ngrams.sizes)?;
        validation::validate_positive_number("ngrams.min_df", self.ngrams.min_df, 1)?;
        validation::validate_positive_number("ngrams.top_n", self.ngrams.top_n, 1)?;
        if let Some(console_top) = self.ngrams.console_top {
            validation::validate_positive_number("ngrams.console_top", console_top, 1)?;
        }
        for word in &self.preprocess.extra_stopwords {
            validation::validate_non_empty_string("preprocess.extra_stopwords", word)?;
        }
        Ok(())
    }
}
