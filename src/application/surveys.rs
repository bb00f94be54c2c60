//! Survey lifecycle operations

use crate::client::Qualtrics;
use crate::error::AppError;
use crate::model::request::{LegacyRequest, flag};
use crate::model::response::LegacyResponse;
use serde_json::{Map, Value};

/// Optional arguments for [`Qualtrics::import_survey`]
#[derive(Debug, Clone, Default)]
pub struct ImportSurveyOptions {
    /// Create the survey in an active state
    pub activate: Option<bool>,
    /// Import the survey file from this URL instead of uploading content
    pub url: Option<String>,
    /// Survey file content uploaded as multipart form data
    pub file_contents: Option<Vec<u8>>,
    /// Owner of the new survey
    pub owner_id: Option<String>,
}

impl Qualtrics {
    /// Returns all surveys for the user, keyed by survey id
    ///
    /// The map preserves the order the platform listed the surveys in.
    pub fn get_surveys(&self) -> Result<Map<String, Value>, AppError> {
        let response = self.legacy_request(LegacyRequest::new("getSurveys"))?;
        let listed = response
            .result_field("Surveys")?
            .as_array()
            .cloned()
            .ok_or_else(|| {
                AppError::ProtocolViolation(String::from("Result.Surveys is not an array"))
            })?;

        let mut surveys = Map::new();
        for survey in listed {
            let id = survey
                .get("SurveyID")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    AppError::ProtocolViolation(String::from("survey entry without SurveyID"))
                })?;
            surveys.insert(id.to_owned(), survey.clone());
        }
        Ok(surveys)
    }

    /// Returns the survey definition as raw XML
    ///
    /// This is the one legacy operation with a non-JSON response format.
    /// Answers to the survey are not included.
    pub fn get_survey(&self, survey_id: &str) -> Result<String, AppError> {
        let request = LegacyRequest::new("getSurvey").param("SurveyID", survey_id);
        match self.legacy_request(request)? {
            LegacyResponse::Raw(document) => Ok(document),
            LegacyResponse::Json(_) => Err(AppError::ProtocolViolation(String::from(
                "expected a non-JSON survey document",
            ))),
        }
    }

    /// Imports a survey and returns the new survey id
    ///
    /// The platform creates an empty survey and reports an error message
    /// when the file content is invalid; handling that case is left to
    /// the caller.
    pub fn import_survey(
        &self,
        import_format: &str,
        name: &str,
        options: &ImportSurveyOptions,
    ) -> Result<String, AppError> {
        let mut request = LegacyRequest::new("importSurvey")
            .param("ImportFormat", import_format)
            .param("Name", name)
            .opt_param("Activate", options.activate.map(flag))
            .opt_param("URL", options.url.as_deref())
            .opt_param("OwnerID", options.owner_id.as_deref());
        if let Some(contents) = &options.file_contents {
            request = request.file("FileContents", "survey", contents.clone());
        }
        let response = self.legacy_request(request)?;
        response.result_str("SurveyID")
    }

    /// Deletes the specified survey
    pub fn delete_survey(&self, survey_id: &str) -> Result<(), AppError> {
        let request = LegacyRequest::new("deleteSurvey").param("SurveyID", survey_id);
        self.legacy_request(request)?;
        Ok(())
    }

    /// Activates the specified survey
    pub fn activate_survey(&self, survey_id: &str) -> Result<(), AppError> {
        let request = LegacyRequest::new("activateSurvey").param("SurveyID", survey_id);
        self.legacy_request(request)?;
        Ok(())
    }

    /// Deactivates the specified survey
    pub fn deactivate_survey(&self, survey_id: &str) -> Result<(), AppError> {
        let request = LegacyRequest::new("deactivateSurvey").param("SurveyID", survey_id);
        self.legacy_request(request)?;
        Ok(())
    }
}
