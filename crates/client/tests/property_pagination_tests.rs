//! Property-based tests for pagination completeness.
//!
//! For any item count and page size, a panel serving the items across
//! `ceil(n / size)` pages must yield exactly those items, in order, using
//! exactly one request per page.

mod common;

use common::*;
use proptest::prelude::*;
use secrecy::SecretString;
use wiremock::matchers::{method, path, query_param};

fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size).max(1)
}

async fn run_walk(total: usize, page_size: usize) -> (Vec<u64>, usize) {
    let mock_server = MockServer::start().await;
    let pages = page_count(total, page_size);
    let ids: Vec<u64> = (1..=total as u64).collect();

    for page in 1..=pages {
        let chunk: Vec<_> = ids
            .iter()
            .skip((page - 1) * page_size)
            .take(page_size)
            .map(|id| server_json(*id, &format!("srv-{}", id), Some("running"), false))
            .collect();

        Mock::given(method("GET"))
            .and(path("/api/application/servers"))
            .and(query_param("page", page.to_string().as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_page(
                chunk,
                page as u32,
                pages as u32,
            )))
            .mount(&mock_server)
            .await;
    }

    let client = PanelClient::builder()
        .base_url(mock_server.uri())
        .api_token(SecretString::new(TEST_TOKEN.to_string().into()))
        .page_size(page_size as u32)
        .build()
        .unwrap();

    let servers = client.fetch_all_servers().await.unwrap();
    let requests = mock_server.received_requests().await.unwrap_or_default().len();
    (servers.into_iter().map(|s| s.id).collect(), requests)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_pagination_is_complete_and_ordered(total in 0usize..120, page_size in 1usize..40) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let (ids, requests) = runtime.block_on(run_walk(total, page_size));

        let expected: Vec<u64> = (1..=total as u64).collect();
        prop_assert_eq!(ids, expected);
        prop_assert_eq!(requests, page_count(total, page_size));
    }
}
