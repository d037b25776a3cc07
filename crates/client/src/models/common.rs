//! Common list envelope shared by every collection endpoint.
//!
//! The panel wraps each collection as
//! `{object: "list", data: [{object, attributes}], meta: {pagination}}`.

use serde::{Deserialize, Serialize};

/// Pagination block of a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub per_page: u64,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
}

impl Pagination {
    /// Whether this page is the last one the panel will serve.
    ///
    /// A block without page counters reads as 0/0 and ends the walk.
    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }
}

/// Metadata attached to a list response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListMeta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// One element of a list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListItem<T> {
    #[serde(default)]
    pub object: Option<String>,
    pub attributes: T,
}

/// A single page of a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default = "Vec::new")]
    pub data: Vec<ListItem<T>>,
    #[serde(default)]
    pub meta: Option<ListMeta>,
}

impl<T> ListResponse<T> {
    /// Pagination metadata, if the panel sent any.
    pub fn pagination(&self) -> Option<Pagination> {
        self.meta.as_ref().and_then(|m| m.pagination)
    }

    /// Whether no further page should be requested after this one.
    ///
    /// Absent metadata counts as the last page.
    pub fn is_last_page(&self) -> bool {
        self.pagination().is_none_or(|p| p.is_last_page())
    }

    /// Unwrap the item attributes in order.
    pub fn into_items(self) -> Vec<T> {
        self.data.into_iter().map(|item| item.attributes).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        id: u64,
    }

    #[test]
    fn test_missing_meta_is_last_page() {
        let page: ListResponse<Thing> =
            serde_json::from_value(json!({"object": "list", "data": [{"attributes": {"id": 1}}]}))
                .unwrap();
        assert!(page.is_last_page());
        assert_eq!(page.into_items(), vec![Thing { id: 1 }]);
    }

    #[test]
    fn test_zero_total_pages_is_last_page() {
        let page: ListResponse<Thing> = serde_json::from_value(json!({
            "data": [],
            "meta": {"pagination": {"total": 0, "count": 0, "per_page": 50, "current_page": 1, "total_pages": 0}}
        }))
        .unwrap();
        assert!(page.is_last_page());
    }

    #[test]
    fn test_pagination_without_page_counters_is_last_page() {
        let page: ListResponse<Thing> = serde_json::from_value(json!({
            "data": [{"attributes": {"id": 4}}],
            "meta": {"pagination": {"total": 1}}
        }))
        .unwrap();
        assert_eq!(page.pagination().map(|p| (p.current_page, p.total_pages)), Some((0, 0)));
        assert!(page.is_last_page());
        assert_eq!(page.into_items(), vec![Thing { id: 4 }]);
    }

    #[test]
    fn test_more_pages_pending() {
        let page: ListResponse<Thing> = serde_json::from_value(json!({
            "data": [{"attributes": {"id": 1}}],
            "meta": {"pagination": {"current_page": 1, "total_pages": 2}}
        }))
        .unwrap();
        assert!(!page.is_last_page());
    }
}
