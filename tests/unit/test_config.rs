use qualtrics_client::constants::{
    CONTACTS_URL, DEFAULT_API_VERSION, EXPORT_API_URL, RESEARCH_SUITE_URL,
};
use qualtrics_client::prelude::*;

#[test]
fn with_credentials_uses_platform_endpoints() {
    let config = Config::with_credentials("test_user", "test_token");

    assert_eq!(config.credentials.user, "test_user");
    assert_eq!(config.credentials.token, "test_token");
    assert_eq!(config.legacy_api.research_suite_url, RESEARCH_SUITE_URL);
    assert_eq!(config.legacy_api.contacts_url, CONTACTS_URL);
    assert_eq!(config.export_api.base_url, EXPORT_API_URL);
}

#[test]
fn default_api_version_is_a_string() {
    let config = Config::with_credentials("test_user", "test_token");
    assert_eq!(config.api_version, DEFAULT_API_VERSION);
    assert_eq!(config.api_version, "2.5");
}

#[test]
fn credentials_debug_redacts_the_token() {
    let config = Config::with_credentials("test_user", "very-secret-token");
    let rendered = format!("{:?}", config.credentials);

    assert!(rendered.contains("test_user"));
    assert!(rendered.contains("<redacted>"));
    assert!(!rendered.contains("very-secret-token"));
}

#[test]
fn client_displays_as_the_user() {
    let config = Config::with_credentials("researcher#brand", "test_token");
    let client = Qualtrics::new(config).expect("Failed to create client");

    assert_eq!(client.to_string(), "researcher#brand");
    assert_eq!(client.user(), "researcher#brand");
}

#[test]
fn version_is_exposed() {
    assert!(!version().is_empty());
    assert_eq!(version(), VERSION);
}
