use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Could not decode '{path}' with any of: {tried}")]
    EncodingError { path: String, tried: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Processing,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AnalysisError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AnalysisError::IoError(_) | AnalysisError::EncodingError { .. } => {
                ErrorCategory::Input
            }
            AnalysisError::ConfigValidationError { .. }
            | AnalysisError::InvalidConfigValueError { .. }
            | AnalysisError::MissingConfigError { .. } => ErrorCategory::Configuration,
            AnalysisError::ProcessingError { .. } => ErrorCategory::Processing,
            AnalysisError::ZipError(_)
            | AnalysisError::CsvError(_)
            | AnalysisError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AnalysisError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                ErrorSeverity::High
            }
            AnalysisError::IoError(_) => ErrorSeverity::Critical,
            AnalysisError::EncodingError { .. } => ErrorSeverity::High,
            AnalysisError::ConfigValidationError { .. }
            | AnalysisError::InvalidConfigValueError { .. }
            | AnalysisError::MissingConfigError { .. } => ErrorSeverity::High,
            AnalysisError::ProcessingError { .. } => ErrorSeverity::Medium,
            AnalysisError::ZipError(_)
            | AnalysisError::CsvError(_)
            | AnalysisError::SerializationError(_) => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AnalysisError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Check that the path exists; set the corpus location with --corpus \
                 or [corpus] path"
                    .to_string()
            }
            AnalysisError::IoError(_) => {
                "Check file permissions and available disk space".to_string()
            }
            AnalysisError::EncodingError { .. } => {
                "Convert the corpus to UTF-8 or add its encoding with --encodings".to_string()
            }
            AnalysisError::ConfigValidationError { field, .. }
            | AnalysisError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the CLI flags or TOML file", field)
            }
            AnalysisError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            AnalysisError::ProcessingError { .. } => {
                "Inspect the corpus contents; run with --verbose for details".to_string()
            }
            AnalysisError::ZipError(_)
            | AnalysisError::CsvError(_)
            | AnalysisError::SerializationError(_) => {
                "Make sure the output directory is writable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AnalysisError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                format!("File not found: {}", e)
            }
            AnalysisError::EncodingError { path, .. } => {
                format!("The file '{}' could not be decoded with any supported encoding", path)
            }
            AnalysisError::ConfigValidationError { message, .. } => {
                format!("Invalid configuration: {}", message)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_high_severity_input_error() {
        let err = AnalysisError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "CorpusEducacion.txt",
        ));
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("not found"));
        assert!(err.recovery_suggestion().contains("--corpus"));
    }

    #[test]
    fn test_missing_file_message_names_any_path() {
        let err = AnalysisError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "./reports/analysis.toml",
        ));
        let message = err.user_friendly_message();
        assert_eq!(message, "File not found: ./reports/analysis.toml");
        assert!(!message.contains("Corpus"));
    }

    #[test]
    fn test_config_errors_point_at_field() {
        let err = AnalysisError::InvalidConfigValueError {
            field: "ngrams.min_df".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.recovery_suggestion().contains("ngrams.min_df"));
    }
}
