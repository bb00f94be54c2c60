//! The three-step response export workflow
//!
//! An export job is created, polled until complete, then fetched:
//! `created -> in-progress(percent)* -> complete(file) | failed`.
//! There is no cancellation; a caller simply stops polling.

use crate::client::Qualtrics;
use crate::constants::DOWNLOAD_CHUNK_SIZE;
use crate::error::AppError;
use crate::model::export::{ExportProgress, ResponseExportRequest};
use crate::transport::export::read_single_entry;
use reqwest::Method;
use serde_json::Value;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::warn;

impl Qualtrics {
    /// Starts an export job for a survey's responses
    ///
    /// Returns the job identifier to pass to
    /// [`Qualtrics::response_export_progress`] and
    /// [`Qualtrics::response_export_file`].
    ///
    /// # Errors
    /// Classification follows the export dispatcher: transport failures,
    /// platform errors from `meta.error`, unexpected HTTP statuses, and
    /// a [`AppError::MalformedResponse`] when a 200 body lacks
    /// `result.id`.
    pub fn create_response_export(
        &self,
        request: &ResponseExportRequest,
    ) -> Result<String, AppError> {
        let url = self.config.export_api.base_url.clone();
        let body = serde_json::to_string(request)?;
        let response = self.v3_json(Method::POST, &url, Some(body))?;
        response
            .result
            .as_ref()
            .and_then(|result| result.get("id"))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| {
                AppError::MalformedResponse(String::from("no result.id in export response"))
            })
    }

    /// Polls the status of an export job
    ///
    /// Never fails: transport and parse problems come back as
    /// [`ExportProgress::ServerFailure`], so a polling loop needs no
    /// error handling to stay alive.
    pub fn response_export_progress(&self, export_id: &str) -> ExportProgress {
        match self.export_progress_inner(export_id) {
            Ok(progress) => progress,
            Err(e) => {
                warn!("export progress poll failed: {}", e);
                ExportProgress::ServerFailure {
                    message: e.to_string(),
                }
            }
        }
    }

    fn export_progress_inner(&self, export_id: &str) -> Result<ExportProgress, AppError> {
        let url = format!("{}/{}", self.config.export_api.base_url, export_id);
        let response = self.v3_json(Method::GET, &url, None)?;
        let result = response.result.ok_or_else(|| {
            AppError::MalformedResponse(String::from("no result in progress response"))
        })?;
        let status = result
            .get("status")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                AppError::MalformedResponse(String::from("no result.status in progress response"))
            })?;

        if status == "complete" {
            let file = result.get("file").and_then(Value::as_str).ok_or_else(|| {
                AppError::MalformedResponse(String::from("no result.file in progress response"))
            })?;
            Ok(ExportProgress::Complete {
                file: file.to_owned(),
            })
        } else {
            let percent = result
                .get("percentComplete")
                .and_then(Value::as_f64)
                .ok_or_else(|| {
                    AppError::MalformedResponse(String::from(
                        "no result.percentComplete in progress response",
                    ))
                })?;
            Ok(ExportProgress::InProgress {
                status: status.to_owned(),
                percent,
            })
        }
    }

    /// Fetches a completed export and returns its content as text
    ///
    /// Accepts either the job identifier or the direct file reference
    /// returned by a `complete` progress poll. The payload is a zip
    /// archive with a single entry of arbitrary name; the entry's
    /// decompressed text is returned.
    ///
    /// # Errors
    /// Returns [`AppError::InvalidArchive`] when the body is not a
    /// valid zip archive or the archive is empty; no partial content is
    /// surfaced.
    pub fn response_export_file(&self, export: &str) -> Result<String, AppError> {
        let url = self.export_file_url(export);
        let response = self.v3_send(Method::GET, &url, None)?;
        let bytes = response.bytes()?;
        read_single_entry(&bytes)
    }

    /// Downloads a completed export archive to local storage
    ///
    /// Streams the raw zip bytes to `destination` in fixed-size chunks.
    /// The destination handle closes on every exit path, including
    /// mid-stream failures.
    pub fn download_response_export_file(
        &self,
        export: &str,
        destination: &Path,
    ) -> Result<(), AppError> {
        let url = self.export_file_url(export);
        let mut response = self.v3_send(Method::GET, &url, None)?;
        let mut file = File::create(destination)?;
        let mut buffer = [0u8; DOWNLOAD_CHUNK_SIZE];
        loop {
            let read = response.read(&mut buffer)?;
            if read == 0 {
                break;
            }
            file.write_all(&buffer[..read])?;
        }
        file.flush()?;
        Ok(())
    }
}
