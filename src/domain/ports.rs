use crate::domain::model::{AnalysisResult, Corpus};
use crate::text::SuffixRules;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn corpus_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn encodings(&self) -> &[String];
    fn min_df(&self) -> usize;
    fn ngram_sizes(&self) -> &[usize];
    fn top_n(&self) -> usize;
    fn console_top(&self) -> usize {
        15
    }
    fn extra_stopwords(&self) -> &[String];
    fn use_builtin_stopwords(&self) -> bool {
        true
    }
    fn suffix_rules(&self) -> SuffixRules {
        SuffixRules::default()
    }
    fn zip_output(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Corpus>;
    async fn transform(&self, corpus: Corpus) -> Result<AnalysisResult>;
    async fn load(&self, result: AnalysisResult) -> Result<String>;
}
