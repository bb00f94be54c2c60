//! Email distribution and survey link operations
//!
//! Distribution requests are queued by the platform; a successful call
//! means the send was accepted, not that any email has left yet. The
//! returned distribution id can be checked with
//! [`Qualtrics::get_distributions`].

use crate::client::Qualtrics;
use crate::constants::SURVEY_LINK_URL;
use crate::error::AppError;
use crate::model::request::{EmbeddedData, LegacyRequest};
use serde_json::Value;

/// A survey mailing to a single panel member
#[derive(Debug, Clone, Default)]
pub struct IndividualDistribution {
    /// Survey to distribute
    pub survey_id: String,
    /// When to send, platform datetime string (`YYYY-MM-DD hh:mm:ss`)
    pub send_date: String,
    /// Verified sending address
    pub sent_from_address: String,
    /// From address shown to the recipient
    pub from_email: String,
    /// From name shown to the recipient
    pub from_name: String,
    /// Email subject
    pub subject: String,
    /// Message to send
    pub message_id: String,
    /// Library the message lives in
    pub message_library_id: String,
    /// Panel the recipient belongs to
    pub panel_id: String,
    /// Library the panel lives in
    pub panel_library_id: String,
    /// The recipient to mail
    pub recipient_id: String,
}

/// A survey mailing to a whole panel
#[derive(Debug, Clone, Default)]
pub struct PanelDistribution {
    /// Survey to distribute
    pub survey_id: String,
    /// When to send, platform datetime string (`YYYY-MM-DD hh:mm:ss`)
    pub send_date: String,
    /// Verified sending address
    pub sent_from_address: String,
    /// From address shown to recipients
    pub from_email: String,
    /// From name shown to recipients
    pub from_name: String,
    /// Email subject
    pub subject: String,
    /// Message to send
    pub message_id: String,
    /// Library the message lives in
    pub message_library_id: String,
    /// Panel to mail
    pub panel_id: String,
    /// Library the panel lives in
    pub panel_library_id: String,
    /// `Individual`, `Multiple` or `Anonymous`
    pub link_type: String,
}

/// A reminder mailing for an earlier distribution
#[derive(Debug, Clone, Default)]
pub struct ReminderDistribution {
    /// The distribution being reminded
    pub parent_email_distribution_id: String,
    /// When to send, platform datetime string (`YYYY-MM-DD hh:mm:ss`)
    pub send_date: String,
    /// Verified sending address
    pub sent_from_address: String,
    /// From address shown to recipients
    pub from_email: String,
    /// From name shown to recipients
    pub from_name: String,
    /// Email subject
    pub subject: String,
    /// Message to send
    pub message_id: String,
    /// Library the message lives in
    pub library_id: String,
}

/// Everything needed to mint a unique survey link for one person
#[derive(Debug, Clone, Default)]
pub struct SurveyLinkRequest {
    /// Survey the link points at, `SV_…`
    pub survey_id: String,
    /// Library the panel lives in
    pub library_id: String,
    /// Panel to add the person to
    pub panel_id: String,
    /// Distribution the link belongs to, `EMD_…`
    pub distribution_id: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address
    pub email: String,
    /// External data reference
    pub external_data_ref: Option<String>,
    /// Language name, defaults to `English`
    pub language: Option<String>,
    /// Embedded data attached to the person
    pub embedded_data: EmbeddedData,
}

impl Qualtrics {
    /// Queues a survey mailing to one panel member and returns the
    /// distribution id
    pub fn send_survey_to_individual(
        &self,
        distribution: &IndividualDistribution,
    ) -> Result<String, AppError> {
        let request = LegacyRequest::new("sendSurveyToIndividual")
            .param("SurveyID", &distribution.survey_id)
            .param("SendDate", &distribution.send_date)
            .param("SentFromAddress", &distribution.sent_from_address)
            .param("FromEmail", &distribution.from_email)
            .param("FromName", &distribution.from_name)
            .param("Subject", &distribution.subject)
            .param("MessageID", &distribution.message_id)
            .param("MessageLibraryID", &distribution.message_library_id)
            .param("PanelID", &distribution.panel_id)
            .param("PanelLibraryID", &distribution.panel_library_id)
            .param("RecipientID", &distribution.recipient_id);
        let response = self.legacy_request(request)?;
        response.result_str("EmailDistributionID")
    }

    /// Queues a survey mailing to a whole panel and returns the
    /// distribution id
    pub fn send_survey_to_panel(
        &self,
        distribution: &PanelDistribution,
    ) -> Result<String, AppError> {
        let request = LegacyRequest::new("sendSurveyToPanel")
            .param("SurveyID", &distribution.survey_id)
            .param("SendDate", &distribution.send_date)
            .param("SentFromAddress", &distribution.sent_from_address)
            .param("FromEmail", &distribution.from_email)
            .param("FromName", &distribution.from_name)
            .param("Subject", &distribution.subject)
            .param("MessageID", &distribution.message_id)
            .param("MessageLibraryID", &distribution.message_library_id)
            .param("PanelID", &distribution.panel_id)
            .param("PanelLibraryID", &distribution.panel_library_id)
            .param("LinkType", &distribution.link_type);
        let response = self.legacy_request(request)?;
        response.result_str("EmailDistributionID")
    }

    /// Queues a reminder for an earlier distribution and returns the new
    /// distribution id
    pub fn send_reminder(&self, reminder: &ReminderDistribution) -> Result<String, AppError> {
        let request = LegacyRequest::new("sendReminder")
            .param(
                "ParentEmailDistributionID",
                &reminder.parent_email_distribution_id,
            )
            .param("SendDate", &reminder.send_date)
            .param("SentFromAddress", &reminder.sent_from_address)
            .param("FromEmail", &reminder.from_email)
            .param("FromName", &reminder.from_name)
            .param("Subject", &reminder.subject)
            .param("MessageID", &reminder.message_id)
            .param("LibraryID", &reminder.library_id);
        let response = self.legacy_request(request)?;
        response.result_str("EmailDistributionID")
    }

    /// Creates a distribution without sending email, for generating
    /// links later
    pub fn create_distribution(
        &self,
        survey_id: &str,
        panel_id: &str,
        description: &str,
        panel_library_id: &str,
    ) -> Result<String, AppError> {
        let request = LegacyRequest::new("createDistribution")
            .param("SurveyID", survey_id)
            .param("PanelID", panel_id)
            .param("Description", description)
            .param("PanelLibraryID", panel_library_id);
        let response = self.legacy_request(request)?;
        response.result_str("EmailDistributionID")
    }

    /// Returns the data for distributions, including delivery status
    pub fn get_distributions(
        &self,
        distribution_id: Option<&str>,
        survey_id: Option<&str>,
    ) -> Result<Value, AppError> {
        let request = LegacyRequest::new("getDistributions")
            .opt_param("DistributionID", distribution_id)
            .opt_param("SurveyID", survey_id);
        self.legacy_request(request)?.into_json()
    }

    /// Adds a person to a panel and returns their unique survey link
    ///
    /// The link joins the distribution, survey and new recipient ids the
    /// way the platform's own mailer does.
    pub fn generate_unique_survey_link(
        &self,
        link: &SurveyLinkRequest,
    ) -> Result<String, AppError> {
        let survey_suffix = id_suffix(&link.survey_id).ok_or_else(|| {
            AppError::InvalidInput(String::from("SurveyID must look like SV_xxxxxxxxxx"))
        })?;
        let distribution_suffix = id_suffix(&link.distribution_id).ok_or_else(|| {
            AppError::InvalidInput(String::from("DistributionID must look like EMD_xxxxxxxxxx"))
        })?;

        let recipient = crate::application::panels::Recipient {
            first_name: link.first_name.clone(),
            last_name: link.last_name.clone(),
            email: link.email.clone(),
            external_data_ref: Some(link.external_data_ref.clone().unwrap_or_default()),
            language: Some(
                link.language
                    .clone()
                    .unwrap_or_else(|| String::from("English")),
            ),
            embedded_data: link.embedded_data.clone(),
        };
        let recipient_id = self.add_recipient(&link.library_id, &link.panel_id, &recipient)?;

        Ok(format!(
            "{SURVEY_LINK_URL}?Q_DL={distribution_suffix}_{survey_suffix}_{recipient_id}"
        ))
    }
}

fn id_suffix(id: &str) -> Option<&str> {
    id.split_once('_').map(|(_, suffix)| suffix)
}
