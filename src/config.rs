//! Configuration for the Qualtrics API client
//!
//! Credentials are supplied programmatically or sourced from the
//! `QUALTRICS_USER` / `QUALTRICS_TOKEN` environment variables (a local
//! `.env` file is honored). Missing credentials are a construction-time
//! error, never a runtime one.

use crate::constants::{
    CONTACTS_URL, DEFAULT_API_VERSION, ENV_API_VERSION, ENV_CONTACTS_URL, ENV_EXPORT_API_URL,
    ENV_QUALTRICS_TOKEN, ENV_QUALTRICS_USER, ENV_RESEARCH_SUITE_URL, EXPORT_API_URL,
    RESEARCH_SUITE_URL,
};
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Authentication credentials for the Qualtrics APIs
#[derive(Serialize, Deserialize, Clone)]
pub struct Credentials {
    /// Account user identifier, e.g. `researcher#university`
    pub user: String,
    /// API token for the user. Sent as the `Token` parameter on legacy
    /// calls and as the `X-API-TOKEN` header on export calls.
    pub token: String,
}

// The token never appears in Debug output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Endpoints of the legacy v2.x APIs
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LegacyApiConfig {
    /// Research Suite endpoint (`Product::ResearchSuite`)
    pub research_suite_url: String,
    /// Contacts endpoint (`Product::Contacts`)
    pub contacts_url: String,
}

/// Endpoint of the v3 Response Export API
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExportApiConfig {
    /// Base URL of the response export resource
    pub base_url: String,
}

/// Main configuration for the Qualtrics API client
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// Legacy API endpoints
    pub legacy_api: LegacyApiConfig,
    /// Export API endpoint
    pub export_api: ExportApiConfig,
    /// Default legacy API version, string-typed. The remote API rejects
    /// numeric representations, so this is never a number.
    pub api_version: String,
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads a `.env` file when present, then reads `QUALTRICS_USER` and
    /// `QUALTRICS_TOKEN`.
    ///
    /// # Errors
    /// Returns [`AppError::MissingCredentials`] when either variable is
    /// absent.
    pub fn from_env() -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("No .env file loaded: {e}"),
        }

        let user = get_env_or_none::<String>(ENV_QUALTRICS_USER).ok_or_else(|| {
            AppError::MissingCredentials(format!(
                "user must be passed explicitly or {ENV_QUALTRICS_USER} must be set"
            ))
        })?;
        let token = get_env_or_none::<String>(ENV_QUALTRICS_TOKEN).ok_or_else(|| {
            AppError::MissingCredentials(format!(
                "token must be passed explicitly or {ENV_QUALTRICS_TOKEN} must be set"
            ))
        })?;

        Ok(Self::with_credentials(user, token))
    }

    /// Creates a configuration from explicit credentials
    ///
    /// Endpoint URLs and the default API version still honor their
    /// environment overrides, which is how tests point the client at a
    /// mock server.
    pub fn with_credentials(user: impl Into<String>, token: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                user: user.into(),
                token: token.into(),
            },
            legacy_api: LegacyApiConfig {
                research_suite_url: get_env_or_default(
                    ENV_RESEARCH_SUITE_URL,
                    String::from(RESEARCH_SUITE_URL),
                ),
                contacts_url: get_env_or_default(ENV_CONTACTS_URL, String::from(CONTACTS_URL)),
            },
            export_api: ExportApiConfig {
                base_url: get_env_or_default(ENV_EXPORT_API_URL, String::from(EXPORT_API_URL)),
            },
            api_version: get_env_or_default(ENV_API_VERSION, String::from(DEFAULT_API_VERSION)),
        }
    }
}
