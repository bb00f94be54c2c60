// Common utilities for integration tests

use qualtrics_client::prelude::*;

/// Path of the Research Suite endpoint on the mock server
pub const RESEARCH_SUITE_PATH: &str = "/WRAPI/ControlPanel/api.php";
/// Path of the Contacts endpoint on the mock server
pub const CONTACTS_PATH: &str = "/WRAPI/Contacts/api.php";
/// Path of the export endpoint on the mock server
pub const EXPORT_PATH: &str = "/API/v3/responseexports";

/// Creates a config with every endpoint pointed at the mock server
pub fn test_config(server_url: &str) -> Config {
    Config {
        credentials: Credentials {
            user: "test_user".to_string(),
            token: "test_token".to_string(),
        },
        legacy_api: LegacyApiConfig {
            research_suite_url: format!("{server_url}{RESEARCH_SUITE_PATH}"),
            contacts_url: format!("{server_url}{CONTACTS_PATH}"),
        },
        export_api: ExportApiConfig {
            base_url: format!("{server_url}{EXPORT_PATH}"),
        },
        api_version: "2.5".to_string(),
    }
}

/// Creates a test client against the mock server
pub fn test_client(server_url: &str) -> Qualtrics {
    Qualtrics::new(test_config(server_url)).expect("Failed to create client")
}

/// A legacy envelope reporting success with the given result payload
pub fn success_body(result: &str) -> String {
    format!(r#"{{"Meta":{{"Status":"Success","Debug":""}},"Result":{result}}}"#)
}
