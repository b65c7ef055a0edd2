use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct AnalysisEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> AnalysisEngine<P> {
    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Run extract, transform and load in order; returns the output location.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting n-gram analysis...");
        self.monitor.log_stats("Start");

        let corpus = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} characters from {} ({})",
            corpus.text.chars().count(),
            corpus.source,
            corpus.encoding
        );
        self.monitor.log_stats("Extract");

        let result = self.pipeline.transform(corpus).await?;
        tracing::info!(
            "Processed {} tokens into {} frequency tables",
            result.stages.filtered_tokens,
            result.tables.len()
        );
        self.monitor.log_stats("Transform");

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
