#![warn(missing_docs)]
//! FlagBench Report - Rendering and Output
//!
//! Turns aggregated result rows into output:
//! - Aligned text table (terminal)
//! - JSON (machine-readable)
//! - CSV (spreadsheet-compatible)

mod csv;
mod json;
mod report;
mod table;

pub use csv::generate_csv_report;
pub use json::generate_json_report;
pub use report::{EnvironmentInfo, Report, ReportMeta, ResultRow};
pub use table::{TableOptions, TableStyle, display_width, format_average, render_table};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Human,
    /// JSON with full metadata
    Json,
    /// CSV for spreadsheets
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" | "table" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
