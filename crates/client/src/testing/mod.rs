//! Testing utilities for panel client tests.
//!
//! Builds list-envelope JSON in the panel's wire format so tests can mount
//! realistic pages on a mock server. Available when running tests or when
//! the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use ptero_client::testing::{list_page, server_json};
//!
//! let page = list_page(vec![server_json(1, "lobby", Some("running"), false)], 1, 1);
//! ```

use serde_json::{Value, json};

/// Server attributes in wire format.
pub fn server_json(id: u64, name: &str, status: Option<&str>, suspended: bool) -> Value {
    json!({
        "id": id,
        "uuid": format!("00000000-0000-0000-0000-{:012}", id),
        "identifier": format!("{:08x}", id),
        "name": name,
        "status": status,
        "suspended": suspended,
        "user": 1,
    })
}

/// User attributes in wire format.
pub fn user_json(id: u64, username: &str, root_admin: bool) -> Value {
    json!({
        "id": id,
        "uuid": format!("00000000-0000-0000-0000-{:012}", id),
        "username": username,
        "email": format!("{}@example.com", username),
        "first_name": username,
        "last_name": "Test",
        "root_admin": root_admin,
        "created_at": "2024-01-01T00:00:00+00:00",
        "updated_at": "2024-01-01T00:00:00+00:00",
    })
}

/// A list page wrapping `attributes` with pagination metadata.
pub fn list_page(attributes: Vec<Value>, current_page: u32, total_pages: u32) -> Value {
    let count = attributes.len();
    json!({
        "object": "list",
        "data": wrap(attributes),
        "meta": {
            "pagination": {
                "total": count,
                "count": count,
                "per_page": 50,
                "current_page": current_page,
                "total_pages": total_pages,
            }
        }
    })
}

/// A list response with no `meta` block at all.
pub fn list_without_meta(attributes: Vec<Value>) -> Value {
    json!({
        "object": "list",
        "data": wrap(attributes),
    })
}

fn wrap(attributes: Vec<Value>) -> Vec<Value> {
    attributes
        .into_iter()
        .map(|a| json!({"object": "item", "attributes": a}))
        .collect()
}
