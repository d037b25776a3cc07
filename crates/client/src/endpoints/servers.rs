//! Server endpoints.

use reqwest::{Client, Method, StatusCode};

use crate::endpoints::fetch_all_pages;
use crate::endpoints::request::{authorized_request, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{ResourceKind, Server};
use crate::outcome::CallOutcome;

/// List every server on the panel.
pub async fn list_all_servers(
    client: &Client,
    base_url: &str,
    api_token: &str,
    page_size: u32,
    max_pages: u32,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<Server>> {
    fetch_all_pages(
        client,
        base_url,
        api_token,
        ResourceKind::Server,
        page_size,
        max_pages,
        metrics,
    )
    .await
}

/// Delete a server. Success iff the panel answers 204.
pub async fn delete_server(
    client: &Client,
    base_url: &str,
    api_token: &str,
    server_id: u64,
    metrics: Option<&MetricsCollector>,
) -> CallOutcome<()> {
    let url = format!("{}{}", base_url, ResourceKind::Server.item_path(server_id));
    let builder = authorized_request(client, Method::DELETE, &url, api_token);
    send_request(
        builder,
        StatusCode::NO_CONTENT,
        "/api/application/servers/{id}",
        "DELETE",
        metrics,
    )
    .await
    .map(|_| ())
}
