//! Bounds validation tests for the configuration loader builder.

use std::time::Duration;

use crate::loader::builder::{ConfigLoader, validate_and_normalize_base_url};
use crate::loader::error::ConfigError;

#[test]
fn test_zero_timeout_rejected() {
    let result = ConfigLoader::new()
        .with_timeout(Duration::from_secs(0))
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_excessive_timeout_rejected() {
    let result = ConfigLoader::new()
        .with_timeout(Duration::from_secs(601))
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_max_timeout_accepted() {
    let config = ConfigLoader::new()
        .with_timeout(Duration::from_secs(600))
        .build()
        .unwrap();
    assert_eq!(config.connection.timeout, Duration::from_secs(600));
}

#[test]
fn test_page_size_bounds() {
    assert!(matches!(
        ConfigLoader::new().with_page_size(0).build(),
        Err(ConfigError::InvalidPagination { .. })
    ));
    assert!(matches!(
        ConfigLoader::new().with_page_size(501).build(),
        Err(ConfigError::InvalidPagination { .. })
    ));
    assert!(ConfigLoader::new().with_page_size(500).build().is_ok());
}

#[test]
fn test_zero_max_pages_rejected() {
    assert!(matches!(
        ConfigLoader::new().with_max_pages(0).build(),
        Err(ConfigError::InvalidPagination { .. })
    ));
}

#[test]
fn test_rate_limit_bounds() {
    assert!(matches!(
        ConfigLoader::new().with_rate_limit_max_requests(0).build(),
        Err(ConfigError::InvalidRateLimit { .. })
    ));
    assert!(matches!(
        ConfigLoader::new()
            .with_rate_limit_window(Duration::from_secs(0))
            .build(),
        Err(ConfigError::InvalidRateLimit { .. })
    ));
    assert!(matches!(
        ConfigLoader::new()
            .with_rate_limit_window(Duration::from_secs(86_401))
            .build(),
        Err(ConfigError::InvalidRateLimit { .. })
    ));
}

#[test]
fn test_base_url_normalization() {
    assert_eq!(
        validate_and_normalize_base_url("  https://panel.example.com/  ").unwrap(),
        "https://panel.example.com"
    );
    assert_eq!(
        validate_and_normalize_base_url("http://10.0.0.5:8080").unwrap(),
        "http://10.0.0.5:8080"
    );
}

#[test]
fn test_base_url_rejects_non_http_scheme() {
    let err = validate_and_normalize_base_url("ftp://panel.example.com").unwrap_err();
    assert!(err.to_string().contains("scheme must be http or https"));
}

#[test]
fn test_base_url_rejects_relative() {
    assert!(matches!(
        validate_and_normalize_base_url("panel.example.com"),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_blank_base_url_is_missing() {
    assert!(matches!(
        validate_and_normalize_base_url("   "),
        Err(ConfigError::MissingBaseUrl)
    ));
}

#[test]
fn test_invalid_base_url_surfaces_from_credentials() {
    let result = ConfigLoader::new()
        .with_base_url("not a url".to_string())
        .with_api_token("ptla_token".to_string())
        .build_credentials();
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}
