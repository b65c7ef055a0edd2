//! Corpus decoding with an ordered list of candidate encodings.

use crate::utils::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    Utf8,
    Latin1,
    Cp1252,
}

/// Windows-1252 code points for bytes 0x80..=0x9F. `None` marks the five
/// bytes the code page leaves undefined.
const CP1252_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'),
    None,
    Some('\u{201A}'),
    Some('\u{0192}'),
    Some('\u{201E}'),
    Some('\u{2026}'),
    Some('\u{2020}'),
    Some('\u{2021}'),
    Some('\u{02C6}'),
    Some('\u{2030}'),
    Some('\u{0160}'),
    Some('\u{2039}'),
    Some('\u{0152}'),
    None,
    Some('\u{017D}'),
    None,
    None,
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201C}'),
    Some('\u{201D}'),
    Some('\u{2022}'),
    Some('\u{2013}'),
    Some('\u{2014}'),
    Some('\u{02DC}'),
    Some('\u{2122}'),
    Some('\u{0161}'),
    Some('\u{203A}'),
    Some('\u{0153}'),
    None,
    Some('\u{017E}'),
    Some('\u{0178}'),
];

impl TextEncoding {
    pub const DEFAULT_ORDER: [TextEncoding; 3] =
        [TextEncoding::Utf8, TextEncoding::Latin1, TextEncoding::Cp1252];

    /// Parse an encoding label, accepting the usual aliases case-insensitively.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Some(TextEncoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" | "l1" => Some(TextEncoding::Latin1),
            "cp1252" | "windows-1252" | "win1252" => Some(TextEncoding::Cp1252),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Cp1252 => "cp1252",
        }
    }

    /// Decode `bytes`, returning `None` when they are not valid in this encoding.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => {
                let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
                std::str::from_utf8(bytes).ok().map(str::to_owned)
            }
            TextEncoding::Latin1 => Some(bytes.iter().map(|&b| b as char).collect()),
            TextEncoding::Cp1252 => bytes
                .iter()
                .map(|&b| match b {
                    0x80..=0x9F => CP1252_HIGH[(b - 0x80) as usize],
                    _ => Some(b as char),
                })
                .collect(),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a list of labels, failing on the first unknown one.
pub fn parse_encodings(labels: &[String]) -> Result<Vec<TextEncoding>> {
    labels
        .iter()
        .map(|label| {
            TextEncoding::from_label(label).ok_or_else(|| AnalysisError::InvalidConfigValueError {
                field: "encodings".to_string(),
                value: label.clone(),
                reason: "Unsupported encoding. Valid encodings: utf-8, latin-1, cp1252".to_string(),
            })
        })
        .collect()
}

/// Try each candidate in order and return the first successful decoding.
pub fn decode_corpus(
    path: &str,
    bytes: &[u8],
    candidates: &[TextEncoding],
) -> Result<(String, TextEncoding)> {
    for encoding in candidates {
        match encoding.decode(bytes) {
            Some(text) => {
                tracing::info!("Archivo cargado exitosamente con codificación: {}", encoding);
                return Ok((text, *encoding));
            }
            None => {
                tracing::warn!("Fallo al cargar con '{}'. Intentando la siguiente...", encoding);
            }
        }
    }

    Err(AnalysisError::EncodingError {
        path: path.to_string(),
        tried: candidates
            .iter()
            .map(TextEncoding::label)
            .collect::<Vec<_>>()
            .join(", "),
    })
}
