//! Walk a paged collection to completion.
//!
//! Invariants:
//! - Pages are requested in order starting at 1 and concatenated in order.
//! - Absent pagination metadata ends the walk after the current page.
//! - At most `max_pages` requests are made; a panel that still reports more
//!   pages after that yields `PageLimitExceeded`.
//! - Any failed page discards everything fetched so far.

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::endpoints::request::{authorized_request, send_request};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{ListResponse, ResourceKind};

/// Fetch every item of a collection.
pub async fn fetch_all_pages<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    api_token: &str,
    resource: ResourceKind,
    page_size: u32,
    max_pages: u32,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<T>> {
    let endpoint = resource.collection_path();
    let url = format!("{}{}", base_url, endpoint);
    let mut items = Vec::new();

    for page in 1..=max_pages {
        let builder = authorized_request(client, Method::GET, &url, api_token)
            .query(&[("page", page), ("per_page", page_size)]);

        let response = send_request(builder, StatusCode::OK, &endpoint, "GET", metrics)
            .await
            .into_result(|message, status| ClientError::Fetch {
                resource,
                status,
                message,
            })?;

        let body: ListResponse<T> = response.json().await.map_err(|e| {
            ClientError::InvalidResponse(format!("{} page {}: {}", resource, page, e))
        })?;

        if let Some(m) = metrics {
            m.record_page_fetched(resource);
        }

        let last = body.is_last_page();
        let fetched = body.data.len();
        items.extend(body.into_items());
        debug!(%resource, page, fetched, total = items.len(), last, "Fetched page");

        if last {
            return Ok(items);
        }
    }

    warn!(%resource, max_pages, "Panel still reports more pages after the page limit");
    Err(ClientError::PageLimitExceeded {
        resource,
        max_pages,
    })
}
