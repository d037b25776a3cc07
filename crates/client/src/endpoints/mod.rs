//! Pterodactyl application API endpoint implementations.
//!
//! Every function here takes the raw `reqwest::Client`, the normalized base
//! URL and the bearer token, so the same calls can be exercised directly
//! against a mock panel without building a [`crate::PanelClient`].

mod connection;
mod pagination;
mod request;
mod servers;
mod users;

pub use connection::test_connection;
pub use pagination::fetch_all_pages;
pub use request::{authorized_request, send_request};
pub use servers::{delete_server, list_all_servers};
pub use users::{delete_user, list_all_users, list_user_servers};

use reqwest::Client;

use crate::metrics::MetricsCollector;
use crate::models::ResourceKind;
use crate::outcome::CallOutcome;

/// Delete one resource of the given kind.
///
/// Never fails: the outcome is always returned for the caller to record.
pub async fn delete_resource(
    client: &Client,
    base_url: &str,
    api_token: &str,
    kind: ResourceKind,
    id: u64,
    metrics: Option<&MetricsCollector>,
) -> CallOutcome<()> {
    match kind {
        ResourceKind::Server => delete_server(client, base_url, api_token, id, metrics).await,
        ResourceKind::User => delete_user(client, base_url, api_token, id, metrics).await,
    }
}
