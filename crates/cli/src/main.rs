//! Ptero CLI - clean up servers and users on a Pterodactyl panel.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Initialize logging, optional OTLP tracing and the optional metrics exporter.
//! - Run cleanup commands locally or serve them over HTTP.
//!
//! Does NOT handle:
//! - Panel API calls (see `crates/client`).
//! - Classification, rate limiting or report building (see `crates/cleanup`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod server;

use args::Cli;
use clap::Parser;
use dispatch::{CommandContext, run_command};
use error::{ExitCode, ExitCodeExt};
use ptero_client::{MetricsCollector, TracingConfig};
use ptero_config::ConfigLoader;

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    // Logs always go to stderr; spans are exported only when an OTLP endpoint is set
    let tracing_guard = match TracingConfig::new()
        .with_otlp_endpoint(cli.otlp_endpoint.clone())
        .with_service_name(cli.otel_service_name.clone())
        .init()
    {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize OpenTelemetry tracing: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    // Initialize metrics exporter if --metrics-bind is provided
    let metrics_exporter = if let Some(ref bind_addr) = cli.metrics_bind {
        match ptero_client::MetricsExporter::install(bind_addr) {
            Ok(exporter) => {
                tracing::info!("Metrics exporter started on http://{}/metrics", bind_addr);
                Some(exporter)
            }
            Err(e) => {
                eprintln!("Failed to start metrics exporter: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        None
    };
    let metrics = metrics_exporter.as_ref().map(|_| MetricsCollector::new());

    let mut loader = match ConfigLoader::new().from_env() {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to load configuration from environment: {:#}", e);
            std::process::exit(ExitCode::from(&e).as_i32());
        }
    };

    // Apply CLI overrides (highest priority)
    if let Some(ref url) = cli.panel_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref token) = cli.api_token {
        loader = loader.with_api_token(token.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    if let args::Commands::Serve { bind: Some(ref addr) } = cli.command {
        loader = loader.with_bind_addr(addr.clone());
    }

    let config = match loader.build() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::from(&e).as_i32());
        }
    };

    let context = CommandContext {
        config,
        loader,
        metrics,
    };

    let exit_code = match run_command(cli, context).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    // Shutdown tracing to ensure all spans are flushed
    tracing_guard.shutdown();

    std::process::exit(exit_code.as_i32());
}
