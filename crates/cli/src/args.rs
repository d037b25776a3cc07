//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate cleanup requests (see `ptero_cleanup::request`).

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ptero-cli")]
#[command(about = "Clean up servers and users on a Pterodactyl panel", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  ptero-cli test-connection\n  ptero-cli run --dry-run\n  ptero-cli run --action removeEmptyUsers --action removeInactiveUsers --inactive-days 60\n  ptero-cli -o json run --action removeAllServers --dry-run\n  ptero-cli serve --bind 0.0.0.0:3000\n"
)]
pub struct Cli {
    /// Base URL of the panel (e.g., https://panel.example.com)
    #[arg(long, global = true, env = "PTERO_PANEL_URL")]
    pub panel_url: Option<String>,

    /// Application API key (ptla_...)
    #[arg(short, long, global = true, env = "PTERO_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Per-call timeout in seconds
    #[arg(long, global = true, env = "PTERO_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true)]
    pub skip_verify: bool,

    /// Output format (json, table)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// OTLP endpoint for exporting traces (e.g., http://localhost:4317)
    #[arg(long, global = true, env = "PTERO_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,

    /// Service name reported with exported traces
    #[arg(long, global = true, env = "OTEL_SERVICE_NAME")]
    pub otel_service_name: Option<String>,

    /// Address for the Prometheus metrics endpoint (e.g., 127.0.0.1:9090)
    #[arg(long, global = true, env = "PTERO_METRICS_BIND")]
    pub metrics_bind: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that the panel is reachable and accepts the API key
    TestConnection,

    /// Run cleanup actions against the panel
    Run {
        /// Action to run; repeat to run several in order
        /// (removeOfflineServers, removeAllServers, removeEmptyUsers, removeInactiveUsers)
        #[arg(long = "action", value_name = "ACTION")]
        actions: Vec<String>,

        /// Report what would be deleted without deleting anything
        #[arg(long)]
        dry_run: bool,

        /// Days without activity after which a user counts as inactive
        #[arg(long, value_name = "DAYS")]
        inactive_days: Option<u64>,
    },

    /// Serve the cleanup HTTP API
    Serve {
        /// Address to listen on (overrides PTERO_BIND_ADDR)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
}
