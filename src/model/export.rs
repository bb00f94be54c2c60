//! Request and progress types for the v3 Response Export API

use crate::model::serialization::rfc3339_option;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// File format of a response export job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values, current layout
    Csv,
    /// One JSON document
    Json,
    /// Comma-separated values, pre-2013 layout
    Csv2013,
    /// XML document
    Xml,
    /// SPSS data file
    Spss,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Csv2013 => "csv2013",
            ExportFormat::Xml => "xml",
            ExportFormat::Spss => "spss",
        };
        write!(f, "{name}")
    }
}

/// Body of an export-creation call
///
/// Only populated options are serialized; the platform treats an absent
/// key and a null differently.
///
/// # Example
/// ```
/// use qualtrics_client::model::export::{ExportFormat, ResponseExportRequest};
///
/// let mut request = ResponseExportRequest::new(ExportFormat::Csv, "SV_abc123");
/// request.limit = Some(100);
/// request.use_labels = Some(true);
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseExportRequest {
    /// Export file format
    pub format: ExportFormat,
    /// Survey whose responses are exported
    pub survey_id: String,
    /// Export only responses received after this one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_response_id: Option<String>,
    /// Only responses recorded after this instant
    #[serde(serialize_with = "rfc3339_option", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// Only responses recorded before this instant
    #[serde(serialize_with = "rfc3339_option", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// Maximum number of responses exported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Restrict the export to these question ids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_question_ids: Option<Vec<String>>,
    /// Export question labels and choice text instead of ids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_labels: Option<bool>,
    /// Decimal separator, `.` or `,`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimal_separator: Option<String>,
    /// Recode seen-but-unanswered questions with this value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seen_unanswered_recode: Option<String>,
    /// Use the local timezone for response date values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_local_time: Option<bool>,
}

impl ResponseExportRequest {
    /// Starts an export request with no optional filters set
    pub fn new(format: ExportFormat, survey_id: impl Into<String>) -> Self {
        Self {
            format,
            survey_id: survey_id.into(),
            last_response_id: None,
            start_date: None,
            end_date: None,
            limit: None,
            included_question_ids: None,
            use_labels: None,
            decimal_separator: None,
            seen_unanswered_recode: None,
            use_local_time: None,
        }
    }
}

/// Outcome of one progress poll for an export job
///
/// Transport and parse failures while polling are deliberately folded
/// into [`ExportProgress::ServerFailure`] instead of an error return,
/// so polling loops stay fault-tolerant by construction. The failure
/// member is distinct from every status the platform itself reports.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportProgress {
    /// The job is still running. `status` is the platform's own word
    /// for the phase (e.g. `inProgress`), `percent` its completion
    /// estimate.
    InProgress {
        /// Platform-reported job status
        status: String,
        /// Percent complete, 0 to 100
        percent: f64,
    },
    /// The job finished; `file` is the reference to download
    Complete {
        /// File reference URL returned by the platform
        file: String,
    },
    /// The poll itself failed; the job state is unknown
    ServerFailure {
        /// Description of what went wrong
        message: String,
    },
}

impl ExportProgress {
    /// True when the job has finished and a file reference is available
    pub fn is_complete(&self) -> bool {
        matches!(self, ExportProgress::Complete { .. })
    }

    /// True when the poll failed and the job state is unknown
    pub fn is_failure(&self) -> bool {
        matches!(self, ExportProgress::ServerFailure { .. })
    }

    /// The file reference, when the job is complete
    pub fn file(&self) -> Option<&str> {
        match self {
            ExportProgress::Complete { file } => Some(file),
            _ => None,
        }
    }

    /// The completion percentage, while the job is running
    pub fn percent(&self) -> Option<f64> {
        match self {
            ExportProgress::InProgress { percent, .. } => Some(*percent),
            _ => None,
        }
    }
}
