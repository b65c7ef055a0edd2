//! Rendering of analysis results: console summaries, frequency tables and
//! the comparison chart.

pub mod chart;
pub mod tables;

pub use chart::render_comparison_svg;
pub use tables::{console_summary, render_csv, render_tsv, summary_json};
