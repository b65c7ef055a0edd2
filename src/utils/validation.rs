use crate::utils::error::{AnalysisError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_ngram_sizes(field_name: &str, sizes: &[usize]) -> Result<()> {
    if sizes.is_empty() {
        return Err(AnalysisError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for &n in sizes {
        validate_positive_number(field_name, n, 1)?;
        if !seen.insert(n) {
            return Err(AnalysisError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: n.to_string(),
                reason: "Duplicate n-gram size".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_encodings(field_name: &str, names: &[String]) -> Result<()> {
    if names.is_empty() {
        return Err(AnalysisError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    for name in names {
        crate::text::encoding::TextEncoding::from_label(name).ok_or_else(|| {
            AnalysisError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.clone(),
                reason: "Unsupported encoding. Valid encodings: utf-8, latin-1, cp1252"
                    .to_string(),
            }
        })?;
    }
    Ok(())
}
