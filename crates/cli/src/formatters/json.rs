//! JSON formatter implementation.

use anyhow::Result;
use ptero_cleanup::CleanupResponse;
use serde_json::json;

use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_cleanup(&self, response: &CleanupResponse) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(response)?))
    }

    fn format_connection(&self, panel: &str) -> Result<String> {
        let body = json!({
            "success": true,
            "message": "Connection successful",
            "panel": panel,
        });
        Ok(format!("{}\n", serde_json::to_string_pretty(&body)?))
    }
}
