/// Endpoint of the legacy Research Suite API
pub const RESEARCH_SUITE_URL: &str = "https://survey.qualtrics.com/WRAPI/ControlPanel/api.php";
/// Endpoint of the legacy Contacts API
pub const CONTACTS_URL: &str = "https://survey.qualtrics.com/WRAPI/Contacts/api.php";
/// Endpoint of the v3 Response Export API
pub const EXPORT_API_URL: &str = "https://survey.qualtrics.com/API/v3/responseexports";
/// Base URL used when assembling unique survey links
pub const SURVEY_LINK_URL: &str = "http://new.qualtrics.com/SE";
/// Default legacy API version. Always sent as a string, the remote API
/// rejects numeric representations.
pub const DEFAULT_API_VERSION: &str = "2.5";
/// Chunk size in bytes for streaming export files to disk
pub const DOWNLOAD_CHUNK_SIZE: usize = 8192;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "qualtrics-client/0.1.0";

/// Environment variable holding the account user identifier
pub const ENV_QUALTRICS_USER: &str = "QUALTRICS_USER";
/// Environment variable holding the API token
pub const ENV_QUALTRICS_TOKEN: &str = "QUALTRICS_TOKEN";
/// Environment variable overriding the Research Suite endpoint
pub const ENV_RESEARCH_SUITE_URL: &str = "QUALTRICS_RESEARCH_SUITE_URL";
/// Environment variable overriding the Contacts endpoint
pub const ENV_CONTACTS_URL: &str = "QUALTRICS_CONTACTS_URL";
/// Environment variable overriding the Response Export endpoint
pub const ENV_EXPORT_API_URL: &str = "QUALTRICS_EXPORT_API_URL";
/// Environment variable overriding the default legacy API version
pub const ENV_API_VERSION: &str = "QUALTRICS_API_VERSION";
