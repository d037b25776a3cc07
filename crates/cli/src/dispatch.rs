//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Build the cleanup request and service each command needs.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use ptero_cleanup::{CleanupOptions, CleanupRequest};
use ptero_client::MetricsCollector;
use ptero_config::{Config, ConfigLoader};
use secrecy::SecretString;
use serde_json::Value;

use crate::args::{Cli, Commands};
use crate::commands;

/// Everything a command needs besides its own arguments.
pub(crate) struct CommandContext {
    /// Validated process configuration.
    pub config: Config,
    /// Loader holding the merged overrides; credentials are built on demand.
    pub loader: ConfigLoader,
    /// Present when the Prometheus exporter is running.
    pub metrics: Option<MetricsCollector>,
}

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli, context: CommandContext) -> Result<()> {
    match cli.command {
        Commands::TestConnection => {
            let credentials = context.loader.build_credentials()?;
            commands::test_connection::run(
                &credentials,
                &context.config.connection,
                context.metrics,
                &cli.output,
            )
            .await?;
        }
        Commands::Run {
            actions,
            dry_run,
            inactive_days,
        } => {
            let request = cleanup_request(
                cli.panel_url,
                cli.api_token,
                actions,
                dry_run,
                inactive_days,
            );
            let service = commands::build_service(&context.config, context.metrics);
            commands::run::run(&service, &request, &cli.output).await?;
        }
        Commands::Serve { .. } => {
            let service = commands::build_service(&context.config, context.metrics);
            commands::serve::run(service, &context.config.server.bind_addr).await?;
        }
    }

    Ok(())
}

/// Build the same request body the HTTP API receives, so both surfaces validate alike.
fn cleanup_request(
    panel_url: Option<String>,
    api_token: Option<String>,
    actions: Vec<String>,
    dry_run: bool,
    inactive_days: Option<u64>,
) -> CleanupRequest {
    let actions = if actions.is_empty() {
        None
    } else {
        Some(Value::Array(actions.into_iter().map(Value::String).collect()))
    };

    CleanupRequest {
        panel_base_url: panel_url,
        api_token: api_token.map(|t| SecretString::new(t.into())),
        actions,
        dry_run,
        options: CleanupOptions {
            inactivity_threshold_days: inactive_days.map(Value::from),
        },
    }
}
