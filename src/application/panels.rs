//! Panel and recipient management on the Research Suite product

use crate::client::Qualtrics;
use crate::error::AppError;
use crate::model::request::{EmbeddedData, LegacyRequest, flag};
use crate::utils::csv::{column_index, header_columns, rows_to_csv_with_header};
use serde_json::{Map, Value};

/// Header names the import operations map to well-known columns
const KNOWN_COLUMNS: [&str; 4] = ["Email", "FirstName", "LastName", "ExternalRef"];

/// A recipient to add to a panel
#[derive(Debug, Clone, Default)]
pub struct Recipient {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address
    pub email: String,
    /// External data reference
    pub external_data_ref: Option<String>,
    /// Language code, e.g. `EN`
    pub language: Option<String>,
    /// Embedded data attached to the recipient
    pub embedded_data: EmbeddedData,
}

/// Export filters for [`Qualtrics::get_panel`]
#[derive(Debug, Clone, Default)]
pub struct PanelExportOptions {
    /// Comma-separated embedded data keys to include
    pub embedded_data: Option<String>,
    /// Return members after this recipient id
    pub last_recipient_id: Option<String>,
    /// Number of members to return; all of them when unset
    pub number_of_records: Option<u64>,
    /// Include each member's language
    pub export_language: Option<bool>,
    /// Only unsubscribed members
    pub unsubscribed: Option<bool>,
    /// Only subscribed members
    pub subscribed: Option<bool>,
}

impl PanelExportOptions {
    pub(crate) fn apply(&self, request: LegacyRequest) -> LegacyRequest {
        request
            .opt_param("EmbeddedData", self.embedded_data.as_deref())
            .opt_param("LastRecipientID", self.last_recipient_id.as_deref())
            .opt_param("NumberOfRecords", self.number_of_records)
            .opt_param("ExportLanguage", self.export_language.map(flag))
            .opt_param("Unsubscribed", self.unsubscribed.map(flag))
            .opt_param("Subscribed", self.subscribed.map(flag))
    }
}

/// Column mapping options for the CSV import operations
///
/// With `column_headers` set and no explicit indexes, the well-known
/// `Email`, `FirstName`, `LastName` and `ExternalRef` columns are
/// located in the CSV header row and sent as 1-based indexes.
#[derive(Debug, Clone, Default)]
pub struct ImportPanelOptions {
    /// The CSV content carries a header row
    pub column_headers: bool,
    /// 1-based index of the email column
    pub email_column: Option<u32>,
    /// 1-based index of the first name column
    pub first_name_column: Option<u32>,
    /// 1-based index of the last name column
    pub last_name_column: Option<u32>,
    /// 1-based index of the external reference column
    pub external_ref_column: Option<u32>,
}

impl ImportPanelOptions {
    /// Resolves column indexes against the CSV header row and adds the
    /// import parameters to the request
    pub(crate) fn apply(
        &self,
        request: LegacyRequest,
        csv: &str,
    ) -> Result<LegacyRequest, AppError> {
        if !self.column_headers {
            return Ok(request
                .opt_param("Email", self.email_column)
                .opt_param("FirstName", self.first_name_column)
                .opt_param("LastName", self.last_name_column)
                .opt_param("ExternalRef", self.external_ref_column));
        }

        let header = header_columns(csv)?;
        let mut resolved = [
            self.email_column,
            self.first_name_column,
            self.last_name_column,
            self.external_ref_column,
        ];
        for (slot, name) in resolved.iter_mut().zip(KNOWN_COLUMNS) {
            if slot.is_none() {
                *slot = column_index(&header, name);
            }
        }

        Ok(request
            .param("ColumnHeaders", "1")
            .opt_param("Email", resolved[0])
            .opt_param("FirstName", resolved[1])
            .opt_param("LastName", resolved[2])
            .opt_param("ExternalRef", resolved[3]))
    }
}

impl Qualtrics {
    /// Creates a new panel and returns its id
    pub fn create_panel(&self, library_id: &str, name: &str) -> Result<String, AppError> {
        let request = LegacyRequest::new("createPanel")
            .param("LibraryID", library_id)
            .param("Name", name);
        let response = self.legacy_request(request)?;
        response.result_str("PanelID")
    }

    /// Deletes the panel
    pub fn delete_panel(&self, library_id: &str, panel_id: &str) -> Result<(), AppError> {
        let request = LegacyRequest::new("deletePanel")
            .param("LibraryID", library_id)
            .param("PanelID", panel_id);
        self.legacy_request(request)?;
        Ok(())
    }

    /// Returns the number of members in a panel
    pub fn get_panel_member_count(
        &self,
        library_id: &str,
        panel_id: &str,
    ) -> Result<u64, AppError> {
        let request = LegacyRequest::new("getPanelMemberCount")
            .param("LibraryID", library_id)
            .param("PanelID", panel_id);
        let response = self.legacy_request(request)?;
        response.result_u64("Count")
    }

    /// Adds a recipient to a panel and returns the recipient id
    pub fn add_recipient(
        &self,
        library_id: &str,
        panel_id: &str,
        recipient: &Recipient,
    ) -> Result<String, AppError> {
        let request = LegacyRequest::new("addRecipient")
            .param("LibraryID", library_id)
            .param("PanelID", panel_id)
            .param("FirstName", &recipient.first_name)
            .param("LastName", &recipient.last_name)
            .param("Email", &recipient.email)
            .opt_param("ExternalDataRef", recipient.external_data_ref.as_deref())
            .opt_param("Language", recipient.language.as_deref())
            .embedded_data(&recipient.embedded_data);
        let response = self.legacy_request(request)?;
        response.result_str("RecipientID")
    }

    /// Returns a recipient and their response history
    pub fn get_recipient(
        &self,
        library_id: &str,
        recipient_id: &str,
    ) -> Result<Value, AppError> {
        let request = LegacyRequest::new("getRecipient")
            .param("LibraryID", library_id)
            .param("RecipientID", recipient_id);
        let response = self.legacy_request(request)?;
        Ok(response.result_field("Recipient")?.clone())
    }

    /// Removes a recipient from a panel
    pub fn remove_recipient(
        &self,
        library_id: &str,
        panel_id: &str,
        recipient_id: &str,
    ) -> Result<(), AppError> {
        let request = LegacyRequest::new("removeRecipient")
            .param("LibraryID", library_id)
            .param("PanelID", panel_id)
            .param("RecipientID", recipient_id);
        self.legacy_request(request)?;
        Ok(())
    }

    /// Returns all panels contained in a library
    pub fn get_panels(&self, library_id: &str) -> Result<Value, AppError> {
        let request = LegacyRequest::new("getPanels").param("LibraryID", library_id);
        let response = self.legacy_request(request)?;
        Ok(response.result_field("Panels")?.clone())
    }

    /// Returns the members of a panel
    ///
    /// This operation may answer without the `Meta` envelope; the parsed
    /// body is returned as-is.
    pub fn get_panel(
        &self,
        library_id: &str,
        panel_id: &str,
        options: &PanelExportOptions,
    ) -> Result<Value, AppError> {
        let request = options.apply(
            LegacyRequest::new("getPanel")
                .param("LibraryID", library_id)
                .param("PanelID", panel_id),
        );
        self.legacy_request(request)?.into_json()
    }

    /// Imports CSV content as a new panel and returns the panel id
    ///
    /// The content must be comma separated with `"` encapsulation. The
    /// platform caps posted content at roughly 8 MB.
    pub fn import_panel(
        &self,
        library_id: &str,
        name: &str,
        csv: &str,
        options: &ImportPanelOptions,
    ) -> Result<String, AppError> {
        let request = options.apply(
            LegacyRequest::new("importPanel")
                .param("LibraryID", library_id)
                .param("Name", name),
            csv,
        )?;
        let response = self.legacy_request(request.body(csv))?;
        response.result_str("PanelID")
    }

    /// Imports row maps as a new panel, encoding them as CSV first
    ///
    /// `header` restricts and orders the exported columns; it defaults
    /// to `Email`, `FirstName`, `LastName`, `ExternalRef`. Row keys
    /// outside the header are ignored and missing cells are left empty.
    pub fn import_json_panel(
        &self,
        library_id: &str,
        name: &str,
        rows: &[Map<String, Value>],
        header: Option<&[&str]>,
    ) -> Result<String, AppError> {
        let header: Vec<String> = header
            .unwrap_or(&KNOWN_COLUMNS)
            .iter()
            .map(|column| (*column).to_owned())
            .collect();
        let contents = rows_to_csv_with_header(rows, &header)?;
        let options = ImportPanelOptions {
            column_headers: true,
            ..ImportPanelOptions::default()
        };
        self.import_panel(library_id, name, &contents, &options)
    }
}
