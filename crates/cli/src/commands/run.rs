//! Run command implementation.

use anyhow::Result;
use ptero_cleanup::{CleanupRequest, CleanupService};
use tracing::warn;

use crate::formatters::{OutputFormat, get_formatter};

/// Rate-limit identity for runs started from this process.
pub const LOCAL_IDENTITY: &str = "local";

pub async fn run(service: &CleanupService, request: &CleanupRequest, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;

    let response = service.run(request, LOCAL_IDENTITY).await?;

    for error in response.report.errors() {
        warn!(action = %error.action, "{}", error.error);
    }

    let output = get_formatter(format).format_cleanup(&response)?;
    print!("{}", output);
    Ok(())
}
