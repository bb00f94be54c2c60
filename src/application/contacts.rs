//! Contact list operations on the Contacts product
//!
//! These operations share the legacy wire conventions but are served
//! from the Contacts endpoint; the operation policy table routes them
//! there.

use crate::application::panels::ImportPanelOptions;
use crate::application::panels::PanelExportOptions;
use crate::client::Qualtrics;
use crate::error::AppError;
use crate::model::request::{LegacyRequest, flag};
use serde_json::Value;
use tracing::warn;

/// Outcome of a contact list truncation
///
/// Truncation removes contacts one by one and keeps going past
/// individual failures, so the outcome is a report rather than a single
/// verdict. Success means every removal succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TruncateReport {
    /// Recipient ids removed from the list
    pub removed: Vec<String>,
    /// Recipient ids whose removal failed
    pub failed: Vec<String>,
}

impl TruncateReport {
    /// True when every contact on the list was removed
    pub fn fully_truncated(&self) -> bool {
        self.failed.is_empty()
    }
}

impl Qualtrics {
    /// Imports CSV content into the directory and returns the list id
    ///
    /// The import runs asynchronously on the platform; rows carrying a
    /// `ContactID` update the existing contact, others create one.
    /// Posted content is capped at roughly 50 MB.
    pub fn import_contacts(
        &self,
        library_id: &str,
        name: &str,
        csv: &str,
        options: &ImportPanelOptions,
    ) -> Result<String, AppError> {
        let request = options.apply(
            LegacyRequest::new("importContacts")
                .param("LibraryID", library_id)
                .param("Name", name),
            csv,
        )?;
        let response = self.legacy_request(request.body(csv))?;
        response.result_str("ListID")
    }

    /// Returns the members of a contact list
    ///
    /// This operation may answer without the `Meta` envelope; the parsed
    /// body is returned as-is.
    pub fn get_list_contacts(
        &self,
        library_id: &str,
        list_id: &str,
        options: &ListContactsOptions,
    ) -> Result<Value, AppError> {
        let request = options.apply(
            LegacyRequest::new("getListContacts")
                .param("LibraryID", library_id)
                .param("ListID", list_id),
        );
        self.legacy_request(request)?.into_json()
    }

    /// Removes a contact from a list
    pub fn remove_contact(
        &self,
        library_id: &str,
        list_id: &str,
        recipient_id: &str,
    ) -> Result<(), AppError> {
        let request = LegacyRequest::new("removeContact")
            .param("LibraryID", library_id)
            .param("ListID", list_id)
            .param("RecipientID", recipient_id);
        self.legacy_request(request)?;
        Ok(())
    }

    /// Removes every contact from a list while keeping the list itself
    ///
    /// Individual removal failures do not abort the sweep; they are
    /// collected in the report. Contacts without a `RecipientID` field
    /// cannot be addressed and are skipped with a warning.
    pub fn truncate_contact_list(
        &self,
        library_id: &str,
        list_id: &str,
    ) -> Result<TruncateReport, AppError> {
        let contacts = self.get_list_contacts(library_id, list_id, &ListContactsOptions::default())?;
        let contacts = contacts.as_array().cloned().unwrap_or_default();

        let mut report = TruncateReport::default();
        for contact in &contacts {
            let Some(recipient_id) = contact.get("RecipientID").and_then(Value::as_str) else {
                warn!("contact without RecipientID skipped during truncation");
                continue;
            };
            match self.remove_contact(library_id, list_id, recipient_id) {
                Ok(()) => report.removed.push(recipient_id.to_owned()),
                Err(e) => {
                    warn!("failed to remove contact {}: {}", recipient_id, e);
                    report.failed.push(recipient_id.to_owned());
                }
            }
        }
        Ok(report)
    }
}

/// Export filters for [`Qualtrics::get_list_contacts`]
#[derive(Debug, Clone, Default)]
pub struct ListContactsOptions {
    /// Filters shared with the panel export operation
    pub export: PanelExportOptions,
    /// Include each contact's history
    pub contact_history: Option<bool>,
}

impl ListContactsOptions {
    fn apply(&self, request: LegacyRequest) -> LegacyRequest {
        self.export
            .apply(request)
            .opt_param("ContactHistory", self.contact_history.map(flag))
    }
}
