use crate::core::{AnalysisResult, ConfigProvider, Corpus, Pipeline, StageCounts, Storage};
use crate::report;
use crate::text::{self, encoding, NgramTable, StopwordFilter};
use crate::utils::error::Result;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const CHART_FILE: &str = "ngram_comparison.svg";
pub const SUMMARY_FILE: &str = "summary.json";
pub const BUNDLE_FILE: &str = "ngram_report.zip";

/// File stem for the frequency table of `n`-grams.
pub fn table_file_stem(n: usize) -> String {
    match n {
        1 => "unigrams".to_string(),
        2 => "bigrams".to_string(),
        3 => "trigrams".to_string(),
        n => format!("{}grams", n),
    }
}

/// Corpus n-gram analysis: decode, preprocess, count, report.
pub struct NgramPipeline<S: Storage, C: ConfigProvider> {
    input: S,
    output: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> NgramPipeline<S, C> {
    /// `input` resolves the corpus path, `output` receives every report file.
    pub fn new(input: S, output: S, config: C) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    fn stopword_filter(&self) -> StopwordFilter {
        let mut filter = if self.config.use_builtin_stopwords() {
            StopwordFilter::spanish()
        } else {
            StopwordFilter::from_list(&[])
        };
        filter.add_stopwords(self.config.extra_stopwords());
        filter
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for NgramPipeline<S, C> {
    async fn extract(&self) -> Result<Corpus> {
        let path = self.config.corpus_path();
        let candidates = encoding::parse_encodings(self.config.encodings())?;

        tracing::info!("Cargando texto de: {}", path);
        let bytes = self.input.read_file(path).await?;
        tracing::debug!("Read {} bytes", bytes.len());

        let (text, encoding) = encoding::decode_corpus(path, &bytes, &candidates)?;

        Ok(Corpus {
            source: path.to_string(),
            text,
            encoding,
        })
    }

    async fn transform(&self, corpus: Corpus) -> Result<AnalysisResult> {
        let mut stages = StageCounts {
            raw_chars: corpus.text.chars().count(),
            ..Default::default()
        };

        tracing::info!("Limpiando texto...");
        let clean = text::clean_text(&corpus.text);
        stages.clean_chars = clean.chars().count();

        tracing::info!("Tokenizando texto...");
        let tokens = text::tokenize(&clean);
        stages.tokens = tokens.len();

        tracing::info!("Lematizando tokens...");
        let lemmas = self.config.suffix_rules().lemmatize(&tokens);
        stages.lemmas = lemmas.len();

        tracing::info!("Eliminando stopwords...");
        let filter = self.stopword_filter();
        tracing::debug!("Stopword list has {} entries", filter.len());
        let filtered = filter.filter(&lemmas);
        stages.filtered_tokens = filtered.len();

        if filtered.is_empty() {
            tracing::warn!("No tokens left after preprocessing {}", corpus.source);
        }

        let min_df = self.config.min_df();
        let sizes = self.config.ngram_sizes();
        tracing::info!(
            "Generando n-gramas de tamaño {:?} (min_df={})...",
            sizes,
            min_df
        );
        let tables: Vec<NgramTable> = sizes
            .iter()
            .map(|&n| text::count_and_filter(text::generate_ngrams(&filtered, n), n, min_df))
            .collect();

        Ok(AnalysisResult {
            source: corpus.source,
            encoding: corpus.encoding,
            min_df,
            stages,
            tables,
        })
    }

    async fn load(&self, result: AnalysisResult) -> Result<String> {
        let console_top = self.config.console_top();
        for table in &result.tables {
            println!("\n{}", report::console_summary(table, console_top));
        }

        let mut files: Vec<(String, Vec<u8>)> = Vec::new();
        for table in &result.tables {
            let stem = table_file_stem(table.n);
            files.push((format!("{}.csv", stem), report::render_csv(table)?.into_bytes()));
            files.push((format!("{}.tsv", stem), report::render_tsv(table)?.into_bytes()));
        }

        tracing::info!("Generando gráfico de barras...");
        let top_n = self.config.top_n();
        files.push((
            CHART_FILE.to_string(),
            report::render_comparison_svg(&result.tables, top_n).into_bytes(),
        ));
        files.push((
            SUMMARY_FILE.to_string(),
            report::summary_json(&result, top_n, chrono::Utc::now())?.into_bytes(),
        ));

        for (name, data) in &files {
            tracing::debug!("Writing {} ({} bytes)", name, data.len());
            self.output.write_file(name, data).await?;
        }

        let output_dir = self.config.output_path().trim_end_matches('/');
        if !self.config.zip_output() {
            return Ok(output_dir.to_string());
        }

        tracing::debug!("Creating ZIP file with {} files", files.len());
        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
            for (name, data) in &files {
                zip.start_file::<_, ()>(name.as_str(), FileOptions::default())?;
                zip.write_all(data)?;
            }
            let cursor = zip.finish()?;
            cursor.into_inner()
        };

        self.output.write_file(BUNDLE_FILE, &zip_data).await?;
        tracing::debug!("ZIP file saved successfully");

        Ok(format!("{}/{}", output_dir, BUNDLE_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::TextEncoding;
    use crate::utils::error::AnalysisError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    const CORPUS: &str = "La calidad docente importa. La calidad docente mejora. \
                          Calidad docente rural, calidad docente rural.";

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn with_file(path: &str, data: &[u8]) -> Self {
            let storage = Self::new();
            storage.write_file(path, data).await.unwrap();
            storage
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                AnalysisError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        corpus_path: String,
        encodings: Vec<String>,
        min_df: usize,
        ngram_sizes: Vec<usize>,
        extra_stopwords: Vec<String>,
        zip_output: bool,
    }

    impl MockConfig {
        fn new() -> Self {
            Self {
                corpus_path: "corpus.txt".to_string(),
                encodings: vec!["utf-8".to_string(), "latin-1".to_string()],
                min_df: 2,
                ngram_sizes: vec![2, 3],
                extra_stopwords: vec!["la".to_string()],
                zip_output: false,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn corpus_path(&self) -> &str {
            &self.corpus_path
        }

        fn output_path(&self) -> &str {
            "test_output"
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
            15
        }

        fn extra_stopwords(&self) -> &[String] {
            &self.extra_stopwords
        }

        // Only the extra list, so counts do not depend on the built-in one
        fn use_builtin_stopwords(&self) -> bool {
            false
        }

        fn zip_output(&self) -> bool {
            self.zip_output
        }
    }

    async fn pipeline_for(
        corpus: &[u8],
        config: MockConfig,
    ) -> (NgramPipeline<MockStorage, MockConfig>, MockStorage) {
        let input = MockStorage::with_file("corpus.txt", corpus).await;
        let output = MockStorage::new();
        (NgramPipeline::new(input, output.clone(), config), output)
    }

    #[tokio::test]
    async fn test_extract_decodes_utf8() {
        let (pipeline, _) = pipeline_for(CORPUS.as_bytes(), MockConfig::new()).await;

        let corpus = pipeline.extract().await.unwrap();

        assert_eq!(corpus.source, "corpus.txt");
        assert_eq!(corpus.encoding, TextEncoding::Utf8);
        assert!(corpus.text.starts_with("La calidad"));
    }

    #[tokio::test]
    async fn test_extract_falls_back_to_latin1() {
        let latin1 = [b'a', b'\xF1', b'o', b' ', b'n', b'i', b'\xF1', b'o'];
        let (pipeline, _) = pipeline_for(&latin1, MockConfig::new()).await;

        let corpus = pipeline.extract().await.unwrap();

        assert_eq!(corpus.encoding, TextEncoding::Latin1);
        assert_eq!(corpus.text, "año niño");
    }

    #[tokio::test]
    async fn test_extract_missing_corpus() {
        let mut config = MockConfig::new();
        config.corpus_path = "missing.txt".to_string();
        let (pipeline, _) = pipeline_for(CORPUS.as_bytes(), config).await;

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::IoError(ref e) if e.kind() == std::io::ErrorKind::NotFound
        ));
    }

    #[tokio::test]
    async fn test_extract_rejects_unknown_encoding() {
        let mut config = MockConfig::new();
        config.encodings = vec!["koi8-r".to_string()];
        let (pipeline, _) = pipeline_for(CORPUS.as_bytes(), config).await;

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidConfigValueError { .. }));
    }

    #[tokio::test]
    async fn test_transform_counts_and_filters() {
        let (pipeline, _) = pipeline_for(CORPUS.as_bytes(), MockConfig::new()).await;

        let corpus = pipeline.extract().await.unwrap();
        let result = pipeline.transform(corpus).await.unwrap();

        assert_eq!(result.stages.tokens, 14);
        assert_eq!(result.stages.lemmas, 14);
        assert_eq!(result.stages.filtered_tokens, 12);

        let bigrams = result.table(2).unwrap();
        assert_eq!(bigrams.len(), 2);
        assert_eq!(bigrams.get(&["calidad", "docente"]), Some(4));
        assert_eq!(bigrams.get(&["docente", "rural"]), Some(2));
        // "importa" is lemmatized to "importo" and appears once
        assert_eq!(bigrams.get(&["docente", "importo"]), None);

        let trigrams = result.table(3).unwrap();
        assert_eq!(trigrams.len(), 1);
        assert_eq!(trigrams.get(&["calidad", "docente", "rural"]), Some(2));
    }

    #[tokio::test]
    async fn test_transform_min_df_one_keeps_singletons() {
        let mut config = MockConfig::new();
        config.min_df = 1;
        let (pipeline, _) = pipeline_for(CORPUS.as_bytes(), config).await;

        let corpus = pipeline.extract().await.unwrap();
        let result = pipeline.transform(corpus).await.unwrap();

        assert_eq!(result.table(2).unwrap().get(&["docente", "importo"]), Some(1));
    }

    #[tokio::test]
    async fn test_transform_empty_corpus() {
        let (pipeline, _) = pipeline_for(b"123 !!! @usuario", MockConfig::new()).await;

        let corpus = pipeline.extract().await.unwrap();
        let result = pipeline.transform(corpus).await.unwrap();

        assert_eq!(result.stages.filtered_tokens, 0);
        assert!(result.tables.iter().all(|t| t.is_empty()));
    }

    #[tokio::test]
    async fn test_load_writes_tables_chart_and_summary() {
        let (pipeline, output) = pipeline_for(CORPUS.as_bytes(), MockConfig::new()).await;

        let corpus = pipeline.extract().await.unwrap();
        let result = pipeline.transform(corpus).await.unwrap();
        let output_path = pipeline.load(result).await.unwrap();

        assert_eq!(output_path, "test_output");

        let bigrams = String::from_utf8(output.get_file("bigrams.csv").await.unwrap()).unwrap();
        assert_eq!(
            bigrams.lines().collect::<Vec<_>>(),
            vec!["ngram,n,frequency", "calidad docente,2,4", "docente rural,2,2"]
        );
        assert!(output.get_file("trigrams.tsv").await.is_some());
        assert!(output.get_file(SUMMARY_FILE).await.is_some());

        let chart = String::from_utf8(output.get_file(CHART_FILE).await.unwrap()).unwrap();
        assert!(chart.contains("Top 15 2-gramas más frecuentes (min_df=2)"));
        assert!(chart.contains("calidad docente rural: 2"));

        assert!(output.get_file(BUNDLE_FILE).await.is_none());
    }

    #[tokio::test]
    async fn test_load_with_zip_bundle() {
        let mut config = MockConfig::new();
        config.zip_output = true;
        let (pipeline, output) = pipeline_for(CORPUS.as_bytes(), config).await;

        let corpus = pipeline.extract().await.unwrap();
        let result = pipeline.transform(corpus).await.unwrap();
        let output_path = pipeline.load(result).await.unwrap();

        assert_eq!(output_path, "test_output/ngram_report.zip");

        let zip_bytes = output.get_file(BUNDLE_FILE).await.unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_bytes)).unwrap();

        let mut file_names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        file_names.sort();

        assert_eq!(
            file_names,
            vec![
                "bigrams.csv",
                "bigrams.tsv",
                "ngram_comparison.svg",
                "summary.json",
                "trigrams.csv",
                "trigrams.tsv",
            ]
        );
    }

    #[test]
    fn test_table_file_stem() {
        assert_eq!(table_file_stem(2), "bigrams");
        assert_eq!(table_file_stem(3), "trigrams");
        assert_eq!(table_file_stem(5), "5grams");
    }
}
