//! Test-connection command implementation.

use anyhow::Result;
use ptero_client::{MetricsCollector, PanelClient};
use ptero_config::{ConnectionConfig, Credentials};
use tracing::info;

use crate::formatters::{OutputFormat, get_formatter};

pub async fn run(
    credentials: &Credentials,
    connection: &ConnectionConfig,
    metrics: Option<MetricsCollector>,
    output_format: &str,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;

    let mut builder = PanelClient::builder()
        .credentials(credentials)
        .from_config(connection);
    if let Some(m) = metrics {
        builder = builder.metrics(m);
    }
    let client = builder.build()?;

    info!("Connecting to {}", client.base_url());
    client.test_connection().await?;

    let output = get_formatter(format).format_connection(client.base_url())?;
    print!("{}", output);
    Ok(())
}
