//! Survey response retrieval and import

use crate::client::Qualtrics;
use crate::error::AppError;
use crate::model::request::{EmbeddedData, LegacyRequest, flag};
use crate::utils::csv::rows_to_csv;
use chrono::NaiveDate;
use serde_json::{Map, Value};

/// Filters for [`Qualtrics::get_legacy_response_data`]
///
/// Only populated fields become request parameters.
#[derive(Debug, Clone, Default)]
pub struct ResponseDataOptions {
    /// Return responses received after this one
    pub last_response_id: Option<String>,
    /// Maximum number of responses returned
    pub limit: Option<u64>,
    /// Return a single response by id
    pub response_id: Option<String>,
    /// Restrict to a response set
    pub response_set_id: Option<String>,
    /// Restrict to a subgroup
    pub subgroup_id: Option<String>,
    /// Only responses recorded on or after this date
    pub start_date: Option<NaiveDate>,
    /// Only responses recorded before this date
    pub end_date: Option<NaiveDate>,
    /// Comma-separated question ids to include
    pub questions: Option<String>,
    /// Export choice labels instead of recode values
    pub labels: Option<bool>,
    /// Export tags instead of question ids
    pub export_tags: Option<bool>,
    /// Export question ids alongside tags
    pub export_question_ids: Option<bool>,
    /// Use the local timezone for dates
    pub local_time: Option<bool>,
    /// Recode seen-but-unanswered questions with this value
    pub unanswered_recode: Option<String>,
    /// Restrict to members of a panel
    pub panel_id: Option<String>,
    /// Include responses still in progress
    pub responses_in_progress: Option<bool>,
    /// Include location data
    pub location_data: Option<bool>,
}

impl ResponseDataOptions {
    fn apply(&self, request: LegacyRequest) -> LegacyRequest {
        request
            .opt_param("LastResponseID", self.last_response_id.as_deref())
            .opt_param("Limit", self.limit)
            .opt_param("ResponseID", self.response_id.as_deref())
            .opt_param("ResponseSetID", self.response_set_id.as_deref())
            .opt_param("SubgroupID", self.subgroup_id.as_deref())
            .opt_param(
                "StartDate",
                self.start_date.map(|d| d.format("%Y-%m-%d").to_string()),
            )
            .opt_param(
                "EndDate",
                self.end_date.map(|d| d.format("%Y-%m-%d").to_string()),
            )
            .opt_param("Questions", self.questions.as_deref())
            .opt_param("Labels", self.labels.map(flag))
            .opt_param("ExportTags", self.export_tags.map(flag))
            .opt_param("ExportQuestionIDs", self.export_question_ids.map(flag))
            .opt_param("LocalTime", self.local_time.map(flag))
            .opt_param("UnansweredRecode", self.unanswered_recode.as_deref())
            .opt_param("PanelID", self.panel_id.as_deref())
            .opt_param(
                "ResponsesInProgress",
                self.responses_in_progress.map(flag),
            )
            .opt_param("LocationData", self.location_data.map(flag))
    }
}

/// Optional arguments for [`Qualtrics::import_responses`]
#[derive(Debug, Clone, Default)]
pub struct ImportResponsesOptions {
    /// Response set to place the imported responses in
    pub response_set_id: Option<String>,
    /// Fetch the CSV from this URL instead of uploading content
    pub file_url: Option<String>,
    /// Value separator, defaults to `,` on the platform side
    pub delimiter: Option<String>,
    /// Value encapsulation character, defaults to `"`
    pub enclosure: Option<String>,
    /// Skip response validation during import
    pub ignore_validation: Option<bool>,
    /// Decimal separator, `.` or `,`
    pub decimal_format: Option<String>,
}

impl ImportResponsesOptions {
    fn apply(&self, request: LegacyRequest) -> LegacyRequest {
        request
            .opt_param("ResponseSetID", self.response_set_id.as_deref())
            .opt_param("FileURL", self.file_url.as_deref())
            .opt_param("Delimiter", self.delimiter.as_deref())
            .opt_param("Enclosure", self.enclosure.as_deref())
            .opt_param("IgnoreValidation", self.ignore_validation.map(flag))
            .opt_param("DecimalFormat", self.decimal_format.as_deref())
    }
}

impl Qualtrics {
    /// Returns response data for a survey in the original legacy format
    ///
    /// The result maps response ids to per-question answers. Key order
    /// matches the document's textual order, which downstream consumers
    /// rely on. This operation may answer without the `Meta` envelope.
    pub fn get_legacy_response_data(
        &self,
        survey_id: &str,
        options: &ResponseDataOptions,
    ) -> Result<Map<String, Value>, AppError> {
        let request =
            options.apply(LegacyRequest::new("getLegacyResponseData").param("SurveyID", survey_id));
        match self.legacy_request(request)?.into_json()? {
            Value::Object(responses) => Ok(responses),
            _ => Err(AppError::MalformedResponse(String::from(
                "expected a JSON object of responses",
            ))),
        }
    }

    /// Returns the data for a single response
    ///
    /// # Errors
    /// Returns [`AppError::Api`] when the platform answers successfully
    /// but the requested response is absent, which usually means it was
    /// deleted.
    pub fn get_response(
        &self,
        survey_id: &str,
        response_id: &str,
        options: &ResponseDataOptions,
    ) -> Result<Value, AppError> {
        let mut options = options.clone();
        options.response_id = Some(response_id.to_owned());
        let mut responses = self.get_legacy_response_data(survey_id, &options)?;
        responses.remove(response_id).ok_or_else(|| {
            AppError::Api(format!(
                "response {response_id} not in result (probably deleted)"
            ))
        })
    }

    /// Imports responses from CSV content into a survey
    pub fn import_responses(
        &self,
        survey_id: &str,
        csv: &str,
        options: &ImportResponsesOptions,
    ) -> Result<(), AppError> {
        let request = options
            .apply(LegacyRequest::new("importResponses").param("SurveyID", survey_id))
            .file("FileContents", "responses.csv", csv.as_bytes().to_vec());
        self.legacy_request(request)?;
        Ok(())
    }

    /// Imports responses from row maps, encoding them as CSV first
    ///
    /// The CSV header is the union of all row keys in first-seen order,
    /// so rows with differing key sets import cleanly. An empty slice is
    /// a no-op.
    pub fn import_responses_from_rows(
        &self,
        survey_id: &str,
        rows: &[Map<String, Value>],
        options: &ImportResponsesOptions,
    ) -> Result<(), AppError> {
        if rows.is_empty() {
            return Ok(());
        }
        let contents = rows_to_csv(rows)?;
        self.import_responses(survey_id, &contents, options)
    }

    /// Updates the embedded data of a recorded response
    pub fn update_response_embedded_data(
        &self,
        survey_id: &str,
        response_id: &str,
        embedded_data: &EmbeddedData,
    ) -> Result<(), AppError> {
        let request = LegacyRequest::new("updateResponseEmbeddedData")
            .param("SurveyID", survey_id)
            .param("ResponseID", response_id)
            .embedded_data(embedded_data);
        self.legacy_request(request)?;
        Ok(())
    }

    /// Returns a platform-rendered HTML view of a single response
    pub fn get_single_response_html(
        &self,
        survey_id: &str,
        response_id: &str,
    ) -> Result<String, AppError> {
        let request = LegacyRequest::new("getSingleResponseHTML")
            .param("SurveyID", survey_id)
            .param("ResponseID", response_id);
        let response = self.legacy_request(request)?;
        let html = response.result()?;
        html.as_str().map(str::to_owned).ok_or_else(|| {
            AppError::ProtocolViolation(String::from("Result is not an HTML string"))
        })
    }
}
