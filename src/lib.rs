pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod text;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{LocalStorage, TomlConfig};

pub use core::{engine::AnalysisEngine, pipeline::NgramPipeline};
pub use utils::error::{AnalysisError, Result};
