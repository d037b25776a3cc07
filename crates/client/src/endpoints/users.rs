//! User endpoints.

use reqwest::{Client, Method, StatusCode};
use tracing::warn;

use crate::endpoints::fetch_all_pages;
use crate::endpoints::request::{authorized_request, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{ListResponse, ResourceKind, Server, User};
use crate::outcome::CallOutcome;

/// List every user on the panel.
pub async fn list_all_users(
    client: &Client,
    base_url: &str,
    api_token: &str,
    page_size: u32,
    max_pages: u32,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<User>> {
    fetch_all_pages(
        client,
        base_url,
        api_token,
        ResourceKind::User,
        page_size,
        max_pages,
        metrics,
    )
    .await
}

/// List the servers owned by one user.
///
/// A failed lookup yields an empty list: one broken user must not abort a sweep.
pub async fn list_user_servers(
    client: &Client,
    base_url: &str,
    api_token: &str,
    user_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Vec<Server> {
    let url = format!("{}/api/application/users/{}/servers", base_url, user_id);
    let builder = authorized_request(client, Method::GET, &url, api_token);
    let outcome = send_request(
        builder,
        StatusCode::OK,
        "/api/application/users/{id}/servers",
        "GET",
        metrics,
    )
    .await;

    let response = match outcome {
        CallOutcome::Ok(response) => response,
        failed => {
            warn!(user_id, error = %failed, "Failed to fetch servers for user");
            return Vec::new();
        }
    };

    match response.json::<ListResponse<Server>>().await {
        Ok(body) => body.into_items(),
        Err(e) => {
            warn!(user_id, error = %e, "Invalid server list for user");
            Vec::new()
        }
    }
}

/// Delete a user. Success iff the panel answers 204.
pub async fn delete_user(
    client: &Client,
    base_url: &str,
    api_token: &str,
    user_id: u64,
    metrics: Option<&MetricsCollector>,
) -> CallOutcome<()> {
    let url = format!("{}{}", base_url, ResourceKind::User.item_path(user_id));
    let builder = authorized_request(client, Method::DELETE, &url, api_token);
    send_request(
        builder,
        StatusCode::NO_CONTENT,
        "/api/application/users/{id}",
        "DELETE",
        metrics,
    )
    .await
    .map(|_| ())
}
