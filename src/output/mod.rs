//! Depth table output
//!
//! One module per format. Every writer targets a generic `io::Write`; the
//! binary only ever hands them stdout - the caller is responsible for
//! capturing and storing the table.

pub mod csv;
pub mod json;
pub mod text;

use crate::estimator::DepthEntry;
use crate::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// Output format for the depth table
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table, compatible with the original tool's output
    Text,
    /// JSON array of table entries
    Json,
    /// Comma-separated rows with a header
    Csv,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Write the depth table in the selected format
pub fn write_table<W: Write>(format: OutputFormat, table: &[DepthEntry], writer: W) -> Result<()> {
    match format {
        OutputFormat::Text => text::write_text(table, writer),
        OutputFormat::Json => json::write_json(table, writer),
        OutputFormat::Csv => csv::write_csv(table, writer),
    }
}
