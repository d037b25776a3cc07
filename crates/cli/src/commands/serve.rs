//! Serve command implementation.

use std::sync::Arc;

use anyhow::{Context, Result};
use ptero_cleanup::CleanupService;
use tokio::net::TcpListener;

pub async fn run(service: CleanupService, bind_addr: &str) -> Result<()> {
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    crate::server::serve(listener, Arc::new(service)).await
}
