//! Response envelopes for both API generations
//!
//! The legacy API wraps results as
//! `{"Meta": {"Status": ..., "ErrorMessage": ..., "Debug": ...}, "Result": {...}}`
//! with three operations exempt from carrying the envelope at all. The
//! v3 export API answers `{"result": {...}, "meta": {"error": {...}}}`
//! and signals errors only through the HTTP status plus `meta.error`.

use crate::error::AppError;
use serde::Deserialize;
use serde_json::Value;

/// The `Meta` block of a legacy response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyMeta {
    /// `"Success"` on success, anything else on a business-level error
    #[serde(rename = "Status")]
    pub status: Option<String>,
    /// Platform-supplied message accompanying a non-success status
    #[serde(rename = "ErrorMessage")]
    pub error_message: Option<String>,
    /// Platform debug text, usually empty
    #[serde(rename = "Debug")]
    pub debug: Option<String>,
}

/// Classified body of a successful legacy call
#[derive(Debug, Clone, PartialEq)]
pub enum LegacyResponse {
    /// Parsed JSON body, envelope included when the platform sent one.
    /// Object key order matches the document's textual order.
    Json(Value),
    /// Raw body text for calls made with a format override
    Raw(String),
}

impl LegacyResponse {
    /// The parsed JSON body, when there is one
    pub fn json(&self) -> Option<&Value> {
        match self {
            LegacyResponse::Json(value) => Some(value),
            LegacyResponse::Raw(_) => None,
        }
    }

    /// The raw body text, when the call used a format override
    pub fn raw(&self) -> Option<&str> {
        match self {
            LegacyResponse::Json(_) => None,
            LegacyResponse::Raw(text) => Some(text),
        }
    }

    /// Consumes the response, expecting a JSON body
    pub fn into_json(self) -> Result<Value, AppError> {
        match self {
            LegacyResponse::Json(value) => Ok(value),
            LegacyResponse::Raw(_) => Err(AppError::MalformedResponse(String::from(
                "expected a JSON response body",
            ))),
        }
    }

    /// The `Result` object of the envelope
    pub fn result(&self) -> Result<&Value, AppError> {
        self.json()
            .and_then(|body| body.get("Result"))
            .ok_or_else(|| {
                AppError::ProtocolViolation(String::from("no Result key in JSON response"))
            })
    }

    /// A named field of the `Result` object
    pub fn result_field(&self, key: &str) -> Result<&Value, AppError> {
        self.result()?.get(key).ok_or_else(|| {
            AppError::ProtocolViolation(format!("no Result.{key} key in JSON response"))
        })
    }

    /// A named `Result` field as an owned string
    pub fn result_str(&self, key: &str) -> Result<String, AppError> {
        self.result_field(key)?
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| AppError::ProtocolViolation(format!("Result.{key} is not a string")))
    }

    /// A named `Result` field as an unsigned integer. The platform is
    /// inconsistent about numeric representation, so both numbers and
    /// numeric strings are accepted.
    pub fn result_u64(&self, key: &str) -> Result<u64, AppError> {
        let value = self.result_field(key)?;
        match value {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
        .ok_or_else(|| AppError::ProtocolViolation(format!("Result.{key} is not numeric")))
    }
}

/// Top-level shape of a v3 export API response
#[derive(Debug, Clone, Deserialize)]
pub struct V3Response {
    /// Operation result payload
    pub result: Option<Value>,
    /// Error-bearing metadata block
    pub meta: Option<V3Meta>,
}

/// The `meta` block of a v3 response
#[derive(Debug, Clone, Deserialize)]
pub struct V3Meta {
    /// Present when the platform reports a business-level failure
    pub error: Option<V3Error>,
}

/// Platform error description inside `meta.error`
#[derive(Debug, Clone, Deserialize)]
pub struct V3Error {
    /// Human-readable platform error message
    #[serde(rename = "errorMessage")]
    pub error_message: Option<String>,
}
