use clap::Parser;
use corpus_ngrams::config::cli::apply_cli_overrides;
use corpus_ngrams::core::ConfigProvider;
use corpus_ngrams::utils::error::{AnalysisError, ErrorSeverity};
use corpus_ngrams::utils::{logger, validation::Validate};
use corpus_ngrams::{AnalysisEngine, CliConfig, LocalStorage, NgramPipeline, TomlConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let toml_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let verbose = cli.verbose
        || toml_config
            .as_ref()
            .and_then(|c| c.log_level())
            .is_some_and(|level| level.eq_ignore_ascii_case("debug"));
    if cli.log_json {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting corpus-ngrams");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let outcome = match toml_config {
        Some(mut config) => {
            tracing::info!("📁 Using configuration file {:?}", cli.config);
            apply_cli_overrides(&mut config, &cli);
            let monitor = cli.monitor || config.monitoring_enabled();
            run(config, monitor).await
        }
        None => {
            let monitor = cli.monitor;
            run(cli, monitor).await
        }
    };

    match outcome {
        Ok(output_path) => {
            tracing::info!("✅ Analysis completed successfully!");
            println!("\n✅ Proceso completado.");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Analysis failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run<C>(config: C, monitor: bool) -> Result<String, AnalysisError>
where
    C: ConfigProvider + Validate + 'static,
{
    config.validate()?;

    if monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let input = LocalStorage::new(".".to_string());
    let output = LocalStorage::new(config.output_path().to_string());
    let pipeline = NgramPipeline::new(input, output, config);

    AnalysisEngine::new_with_monitoring(pipeline, monitor)
        .run()
        .await
}
