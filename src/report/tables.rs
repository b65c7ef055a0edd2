use crate::domain::model::AnalysisResult;
use crate::text::NgramTable;
use crate::utils::error::{AnalysisError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct FrequencyRow<'a> {
    ngram: &'a str,
    n: usize,
    frequency: usize,
}

fn render_delimited(table: &NgramTable, delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(["ngram", "n", "frequency"])?;

    for entry in table.top(table.len()) {
        let label = entry.label();
        writer.serialize(FrequencyRow {
            ngram: &label,
            n: table.n,
            frequency: entry.count,
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AnalysisError::ProcessingError {
            message: format!("Failed to flush frequency table: {}", e),
        })?;
    String::from_utf8(bytes).map_err(|e| AnalysisError::ProcessingError {
        message: format!("Frequency table is not valid UTF-8: {}", e),
    })
}

/// All entries of `table` as CSV (`ngram,n,frequency`), most frequent first.
pub fn render_csv(table: &NgramTable) -> Result<String> {
    render_delimited(table, b',')
}

pub fn render_tsv(table: &NgramTable) -> Result<String> {
    render_delimited(table, b'\t')
}

/// `n-gram: count` lines for the `k` most frequent entries.
pub fn console_summary(table: &NgramTable, k: usize) -> String {
    let mut lines = vec![format!(
        "--- Frecuencias de {}-gramas (filtrado por min_df={}) ---",
        table.n, table.min_df
    )];
    if table.is_empty() {
        lines.push("(ninguno)".to_string());
    }
    for entry in table.top(k) {
        lines.push(format!("{}: {}", entry.label(), entry.count));
    }
    lines.join("\n")
}

#[derive(Debug, Serialize)]
struct TableSummary {
    n: usize,
    entries: usize,
    top: Vec<TopEntry>,
}

#[derive(Debug, Serialize)]
struct TopEntry {
    ngram: String,
    frequency: usize,
}

#[derive(Debug, Serialize)]
struct ReportSummary<'a> {
    source: &'a str,
    encoding: &'a str,
    min_df: usize,
    stages: &'a crate::domain::model::StageCounts,
    tables: Vec<TableSummary>,
    generated_at: DateTime<Utc>,
}

pub fn summary_json(
    result: &AnalysisResult,
    top_n: usize,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let summary = ReportSummary {
        source: &result.source,
        encoding: result.encoding.label(),
        min_df: result.min_df,
        stages: &result.stages,
        tables: result
            .tables
            .iter()
            .map(|table| TableSummary {
                n: table.n,
                entries: table.len(),
                top: table
                    .top(top_n)
                    .into_iter()
                    .map(|entry| TopEntry {
                        ngram: entry.label(),
                        frequency: entry.count,
                    })
                    .collect(),
            })
            .collect(),
        generated_at,
    };

    Ok(serde_json::to_string_pretty(&summary)?)
}
