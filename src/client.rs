//! Client for the Qualtrics survey platform
//!
//! This module provides the [`Qualtrics`] type that every API wrapper
//! hangs off. Unlike the classic bindings for this platform there is no
//! mutable "last call outcome" state on the client: each call returns an
//! explicit `Result`, so a single instance is safe to share across
//! threads without instance-per-thread discipline.
//!
//! # Example
//! ```ignore
//! use qualtrics_client::client::Qualtrics;
//! use qualtrics_client::config::Config;
//!
//! let config = Config::with_credentials("user#brand", "secret-token");
//! let client = Qualtrics::new(config)?;
//! let panel_id = client.create_panel("GR_abc123", "Spring cohort")?;
//! ```

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::blocking::Client as HttpClient;
use std::fmt;

/// Client for the Qualtrics Research Suite, Contacts and Response
/// Export APIs
///
/// Calls are synchronous and block the calling thread for the duration
/// of the network round trip. The client configures no timeout of its
/// own; use [`Qualtrics::with_http_client`] to supply a transport with
/// custom timeouts, proxies or TLS settings.
pub struct Qualtrics {
    pub(crate) config: Config,
    pub(crate) http: HttpClient,
}

impl Qualtrics {
    /// Creates a new client from the given configuration
    ///
    /// # Errors
    /// Returns [`AppError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http = HttpClient::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { config, http })
    }

    /// Creates a new client with credentials taken from the environment
    ///
    /// # Errors
    /// Returns [`AppError::MissingCredentials`] when `QUALTRICS_USER` or
    /// `QUALTRICS_TOKEN` is not set.
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::from_env()?)
    }

    /// Creates a new client around an externally configured transport
    pub fn with_http_client(config: Config, http: HttpClient) -> Self {
        Self { config, http }
    }

    /// Returns the active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the account user identifier this client authenticates as
    pub fn user(&self) -> &str {
        &self.config.credentials.user
    }
}

impl fmt::Display for Qualtrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.config.credentials.user)
    }
}
