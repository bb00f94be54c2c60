//! Error taxonomy for the Qualtrics client
//!
//! Every failure mode of the platform maps onto exactly one variant, so
//! callers can distinguish network trouble from a platform-reported
//! business error or an upstream contract change without inspecting
//! message strings.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Network-level failure: connection refused, timeout, redirect
    /// loop or any other transport exception. Never retried.
    Transport(reqwest::Error),
    /// HTTP 403 from the legacy API, regardless of body content
    Forbidden,
    /// HTTP 401 on the survey-retrieval operation
    Unauthorized,
    /// Non-200 status from the export API without a platform error message
    HttpStatus(StatusCode),
    /// Response body failed to parse as the expected format
    MalformedResponse(String),
    /// Body parsed fine but violates the envelope contract. This signals
    /// an upstream API change, not a caller mistake.
    ProtocolViolation(String),
    /// Well-formed envelope reporting a business-level failure, carrying
    /// the platform's own message
    Api(String),
    /// File payload is not a valid single-entry zip archive
    InvalidArchive(String),
    /// Product selector is not one of the known API targets
    UnsupportedProduct(String),
    /// Neither arguments nor environment supplied a credential
    MissingCredentials(String),
    /// Caller-supplied argument failed validation
    InvalidInput(String),
    /// JSON serialization failure for a request body
    Json(serde_json::Error),
    /// Local I/O failure while reading or writing files
    Io(std::io::Error),
    /// CSV encoding or parsing failure
    Csv(csv::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Transport(e) => write!(f, "transport error: {e}"),
            AppError::Forbidden => write!(f, "forbidden"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::HttpStatus(status) => write!(f, "unexpected http status: {status}"),
            AppError::MalformedResponse(msg) => write!(f, "malformed response: {msg}"),
            AppError::ProtocolViolation(msg) => write!(f, "protocol violation: {msg}"),
            AppError::Api(msg) => write!(f, "api error: {msg}"),
            AppError::InvalidArchive(msg) => write!(f, "invalid archive: {msg}"),
            AppError::UnsupportedProduct(product) => write!(f, "unsupported product: {product}"),
            AppError::MissingCredentials(msg) => write!(f, "missing credentials: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Csv(e) => write!(f, "csv error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Transport(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Transport(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Io(error)
    }
}

impl From<csv::Error> for AppError {
    fn from(error: csv::Error) -> Self {
        AppError::Csv(error)
    }
}
