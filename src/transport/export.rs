//! Dispatcher for the v3 Response Export API
//!
//! The export API takes JSON request bodies authenticated with an
//! `X-API-TOKEN` header. Errors are signaled only by a non-200 HTTP
//! status, optionally refined by a `meta.error.errorMessage` field in
//! the body; there is no per-response status envelope like the legacy
//! API's. Completed exports are fetched as a zip archive with exactly
//! one entry.

use crate::client::Qualtrics;
use crate::error::AppError;
use crate::model::response::V3Response;
use reqwest::{Method, StatusCode, blocking::Response};
use std::io::{Cursor, Read};
use tracing::{debug, error};

impl Qualtrics {
    /// Issues one export API request and classifies the HTTP outcome
    ///
    /// Returns the raw response on a 200 so callers can choose between
    /// JSON decoding and byte streaming.
    pub(crate) fn v3_send(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<Response, AppError> {
        debug!("export {} {}", method, url);

        let mut builder = self
            .http
            .request(method, url)
            .header("X-API-TOKEN", &self.config.credentials.token)
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send()?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status != StatusCode::OK {
            let body = response.text().unwrap_or_default();
            if let Some(message) = platform_error_message(&body) {
                error!("export api error: {}", message);
                return Err(AppError::Api(message));
            }
            error!("export request failed with status {}: {}", status, body);
            return Err(AppError::HttpStatus(status));
        }

        Ok(response)
    }

    /// Issues one export API request and decodes the JSON body
    pub(crate) fn v3_json(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<V3Response, AppError> {
        let response = self.v3_send(method, url, body)?;
        let text = response.text()?;
        serde_json::from_str(&text)
            .map_err(|e| AppError::MalformedResponse(format!("not a JSON document: {e}")))
    }

    /// Resolves a job identifier or direct file reference to a URL.
    /// A string carrying a scheme marker is already a reference.
    pub(crate) fn export_file_url(&self, export: &str) -> String {
        if export.contains("://") {
            export.to_owned()
        } else {
            format!("{}/{}/file", self.config.export_api.base_url, export)
        }
    }
}

/// Extracts the platform's error message from a v3 error body, when the
/// body is well-formed enough to carry one
fn platform_error_message(body: &str) -> Option<String> {
    let parsed: V3Response = serde_json::from_str(body).ok()?;
    parsed.meta?.error?.error_message
}

/// Extracts the single entry of an export archive as text
///
/// The platform wraps every export file in a zip archive with exactly
/// one member of arbitrary name.
pub(crate) fn read_single_entry(bytes: &[u8]) -> Result<String, AppError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| AppError::InvalidArchive(e.to_string()))?;
    if archive.is_empty() {
        return Err(AppError::InvalidArchive(String::from(
            "archive contains no entries",
        )));
    }
    let mut entry = archive
        .by_index(0)
        .map_err(|e| AppError::InvalidArchive(e.to_string()))?;
    let mut contents = String::new();
    entry.read_to_string(&mut contents)?;
    Ok(contents)
}
