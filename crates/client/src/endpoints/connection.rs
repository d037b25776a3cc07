//! Connectivity and credential check.

use reqwest::{Client, Method, StatusCode};

use crate::endpoints::request::{authorized_request, send_request};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Verify the panel is reachable and accepts the token.
///
/// Issues one `GET /api/application/users?per_page=1`; anything but a 200
/// is an [`ClientError::Authentication`] naming the cause.
pub async fn test_connection(
    client: &Client,
    base_url: &str,
    api_token: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    let url = format!("{}/api/application/users", base_url);
    let builder =
        authorized_request(client, Method::GET, &url, api_token).query(&[("per_page", 1)]);

    send_request(
        builder,
        StatusCode::OK,
        "/api/application/users",
        "GET",
        metrics,
    )
    .await
    .map(|_| ())
    .into_result(|message, _| ClientError::Authentication(message))
}
