//! Dispatcher for the legacy Research Suite and Contacts APIs
//!
//! One code path performs any named legacy operation and classifies its
//! outcome uniformly. Response shapes vary by endpoint (JSON with a
//! `Meta` envelope, bare JSON, raw XML) and error reporting is
//! inconsistent (HTTP status codes, embedded error objects, malformed
//! bodies); the classifier in this module is where all of that is
//! normalized into one [`Result`].

use crate::client::Qualtrics;
use crate::error::AppError;
use crate::model::operation::{OperationPolicy, Product, operation_policy};
use crate::model::request::{FormatParam, LegacyRequest};
use crate::model::response::{LegacyMeta, LegacyResponse};
use reqwest::StatusCode;
use reqwest::blocking::multipart::{Form, Part};
use serde_json::Value;
use tracing::{debug, error};

impl Qualtrics {
    /// Performs one legacy API operation and classifies its outcome
    ///
    /// Issues a GET when the request carries neither body nor file
    /// attachments, a form POST for a raw body, and a multipart POST
    /// for attachments. A raw body wins over attachments when both are
    /// present.
    ///
    /// # Errors
    /// * [`AppError::Transport`] - network-level failure, never retried
    /// * [`AppError::Forbidden`] - HTTP 403, regardless of body
    /// * [`AppError::Unauthorized`] - HTTP 401 on `getSurvey`; a 401 on
    ///   any other operation falls through to body parsing
    /// * [`AppError::MalformedResponse`] - body is not JSON and no
    ///   format override was supplied
    /// * [`AppError::ProtocolViolation`] - JSON body without the `Meta`
    ///   envelope (for non-exempt operations) or without `Meta.Status`
    /// * [`AppError::Api`] - envelope status other than `"Success"`,
    ///   carrying the platform's message
    pub fn legacy_request(&self, request: LegacyRequest) -> Result<LegacyResponse, AppError> {
        let policy = operation_policy(request.operation());
        let url = match request.effective_product(&policy) {
            Product::ResearchSuite => &self.config.legacy_api.research_suite_url,
            Product::Contacts => &self.config.legacy_api.contacts_url,
        };
        let format = request.effective_format(&policy);
        let query = request.build_query(&self.config.credentials, &self.config.api_version);

        debug!("legacy {} {}", request.operation(), url);

        let builder = if let Some(body) = request.raw_body() {
            self.http.post(url).query(&query).body(body.to_owned())
        } else if !request.attachments().is_empty() {
            let mut form = Form::new();
            for attachment in request.attachments() {
                form = form.part(
                    attachment.field.clone(),
                    Part::bytes(attachment.contents.clone()).file_name(attachment.filename.clone()),
                );
            }
            self.http.post(url).query(&query).multipart(form)
        } else {
            self.http.get(url).query(&query)
        };

        let response = builder.send()?;
        let status = response.status();
        let body = response.text()?;
        debug!("Response status: {}", status);

        classify(&policy, &format, request.operation(), status, &body)
    }
}

/// Classifies a legacy response body against the operation's policy
fn classify(
    policy: &OperationPolicy,
    format: &FormatParam,
    operation: &str,
    status: StatusCode,
    body: &str,
) -> Result<LegacyResponse, AppError> {
    if status == StatusCode::FORBIDDEN {
        error!("legacy {} forbidden: {}", operation, body);
        return Err(AppError::Forbidden);
    }
    // Only the survey-retrieval operation is known to answer 401 for a
    // bad token; elsewhere the status is not meaningful and the body is
    // parsed normally.
    if status == StatusCode::UNAUTHORIZED && operation == "getSurvey" {
        error!("legacy {} unauthorized", operation);
        return Err(AppError::Unauthorized);
    }

    let parsed: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if format.is_override() => {
            // Operations requesting a custom format answer with a
            // non-JSON document; the raw text is the result.
            return Ok(LegacyResponse::Raw(body.to_owned()));
        }
        Err(_) => {
            return Err(AppError::MalformedResponse(String::from(
                "not a JSON document",
            )));
        }
    };

    let meta_value = match parsed.get("Meta") {
        Some(meta) => meta.clone(),
        None if !policy.expects_envelope => return Ok(LegacyResponse::Json(parsed)),
        None => {
            return Err(AppError::ProtocolViolation(String::from(
                "no Meta key in JSON response",
            )));
        }
    };

    let meta: LegacyMeta = serde_json::from_value(meta_value).map_err(|_| {
        AppError::ProtocolViolation(String::from("Meta key is not an envelope object"))
    })?;
    let meta_status = meta.status.ok_or_else(|| {
        AppError::ProtocolViolation(String::from("no Status key in JSON response"))
    })?;

    if meta_status == "Success" {
        return Ok(LegacyResponse::Json(parsed));
    }

    let message = meta
        .error_message
        .unwrap_or_else(|| format!("status {meta_status}"));
    error!("legacy {} failed: {}", operation, message);
    Err(AppError::Api(message))
}
