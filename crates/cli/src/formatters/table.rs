//! Table formatter for cleanup reports.
//!
//! Responsibilities:
//! - Render the summary, per-item outcomes and action errors as tab-separated text.
//!
//! Does NOT handle:
//! - Machine-readable output (see `json`).

use anyhow::Result;
use ptero_cleanup::{CategorySummary, CleanupResponse, ItemOutcome, Subject};

use crate::formatters::{DEFAULT_MISSING_VALUE, Formatter};

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_cleanup(&self, response: &CleanupResponse) -> Result<String> {
        let report = &response.report;
        let mut output = String::new();

        output.push_str(&format!("{}\n", response.message));
        output.push_str(&format!("Timestamp: {}\n", report.timestamp().to_rfc3339()));
        let actions: Vec<&str> = report.actions().iter().map(|a| a.as_str()).collect();
        output.push_str(&format!("Actions: {}\n\n", actions.join(", ")));

        output.push_str("--- Summary ---\n");
        output.push_str("Category\tTotal\tProcessed\tDeleted\n");
        push_summary(&mut output, "servers", &report.summary().servers);
        push_summary(&mut output, "users", &report.summary().users);

        let details = report.details();
        if !details.servers.is_empty() {
            output.push_str("\n--- Servers ---\n");
            output.push_str("ID\tName\tStatus\tReason\tResult\n");
            for item in &details.servers {
                push_item(&mut output, item);
            }
        }
        if !details.users.is_empty() {
            output.push_str("\n--- Users ---\n");
            output.push_str("ID\tUsername\tEmail\tReason\tResult\n");
            for item in &details.users {
                push_item(&mut output, item);
            }
        }

        if !report.errors().is_empty() {
            output.push_str("\n--- Errors ---\n");
            for error in report.errors() {
                output.push_str(&format!("{}: {}\n", error.action, error.error));
            }
        }

        output.push_str(&format!(
            "\nRate limit: {} remaining, resets in {}s\n",
            response.rate_limit.remaining, response.rate_limit.reset_in
        ));
        Ok(output)
    }

    fn format_connection(&self, panel: &str) -> Result<String> {
        Ok(format!("Connection successful: {}\n", panel))
    }
}

fn push_summary(output: &mut String, label: &str, summary: &CategorySummary) {
    output.push_str(&format!(
        "{}\t{}\t{}\t{}\n",
        label, summary.total, summary.processed, summary.deleted
    ));
}

fn result_label(item: &ItemOutcome) -> String {
    if item.dry_run {
        return "would delete".to_string();
    }
    match (item.success, &item.error) {
        (Some(true), _) => "deleted".to_string(),
        (_, Some(error)) => format!("failed: {}", error),
        _ => DEFAULT_MISSING_VALUE.to_string(),
    }
}

fn push_item(output: &mut String, item: &ItemOutcome) {
    let result = result_label(item);
    match &item.subject {
        Subject::Server { name, status, .. } => output.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            item.id,
            name,
            status.as_deref().unwrap_or(DEFAULT_MISSING_VALUE),
            item.reason,
            result
        )),
        Subject::User {
            username, email, ..
        } => output.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            item.id, username, email, item.reason, result
        )),
    }
}
