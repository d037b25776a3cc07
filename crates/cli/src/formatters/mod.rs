//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide JSON and table renderings of command results.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - JSON output is the same envelope the HTTP API returns.
//! - Table output shows `N/A` for missing values.

use anyhow::Result;
use ptero_cleanup::CleanupResponse;

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Placeholder for missing values in human-facing output.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

/// Formatter trait for command results.
pub trait Formatter {
    /// Format a completed cleanup run.
    fn format_cleanup(&self, response: &CleanupResponse) -> Result<String>;

    /// Format a successful connection check.
    fn format_connection(&self, panel: &str) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}
