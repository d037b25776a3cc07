//! Request construction and status classification shared by all endpoints.
//!
//! Every panel call goes through [`send_request`], which turns the transport
//! result into a [`CallOutcome`] and records metrics for it.

use std::time::Instant;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use tracing::debug;

use ptero_config::constants::USER_AGENT as TOOL_USER_AGENT;

use crate::metrics::{ErrorCategory, MetricsCollector};
use crate::outcome::CallOutcome;
use crate::tracing::inject_trace_context;

/// Build a request carrying the panel's required headers.
pub fn authorized_request(
    client: &Client,
    method: Method,
    url: &str,
    api_token: &str,
) -> RequestBuilder {
    client
        .request(method, url)
        .header(AUTHORIZATION, format!("Bearer {}", api_token))
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, "application/json")
        .header(USER_AGENT, TOOL_USER_AGENT)
}

/// Send a request and classify the result.
///
/// # Arguments
///
/// * `builder` - The request to send
/// * `expected` - The status that counts as success (200 for reads, 204 for deletes)
/// * `endpoint` - Path template used as the metrics label
/// * `method` - HTTP method used as the metrics label
/// * `metrics` - Optional collector
pub async fn send_request(
    builder: RequestBuilder,
    expected: StatusCode,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> CallOutcome<Response> {
    let builder = inject_trace_context(builder);

    if let Some(m) = metrics {
        m.record_request(endpoint, method);
    }

    let start = Instant::now();
    let result = builder.send().await;
    let elapsed = start.elapsed();

    let status = result.as_ref().ok().map(|r| r.status().as_u16());
    let outcome = match result {
        Ok(response) => classify_status(response, expected),
        Err(e) => CallOutcome::transport(describe_transport_error(&e)),
    };

    debug!(
        endpoint,
        method,
        status,
        elapsed_ms = elapsed.as_millis() as u64,
        ok = outcome.is_ok(),
        "Panel request finished"
    );

    if let Some(m) = metrics {
        m.record_request_duration(endpoint, method, elapsed, status);
        if let Some(category) = ErrorCategory::from_outcome(&outcome) {
            m.record_error(endpoint, method, category);
        }
    }

    outcome
}

fn classify_status(response: Response, expected: StatusCode) -> CallOutcome<Response> {
    let status = response.status();
    if status == expected {
        CallOutcome::Ok(response)
    } else if status.as_u16() >= 500 {
        CallOutcome::TransportFailed {
            cause: format!("Panel returned server error status {}", status.as_u16()),
            status: Some(status.as_u16()),
        }
    } else {
        CallOutcome::ApiRejected {
            status: status.as_u16(),
        }
    }
}

fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "Request timed out".to_string()
    } else if err.is_connect() {
        format!("Connection failed: {}", err)
    } else {
        err.to_string()
    }
}
