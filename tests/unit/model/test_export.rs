use assert_json_diff::assert_json_eq;
use chrono::TimeZone;
use chrono::Utc;
use qualtrics_client::model::export::{ExportFormat, ExportProgress, ResponseExportRequest};
use serde_json::json;

#[test]
fn export_formats_serialize_to_platform_names() {
    assert_json_eq!(serde_json::to_value(ExportFormat::Csv).unwrap(), json!("csv"));
    assert_json_eq!(serde_json::to_value(ExportFormat::Json).unwrap(), json!("json"));
    assert_json_eq!(
        serde_json::to_value(ExportFormat::Csv2013).unwrap(),
        json!("csv2013")
    );
    assert_json_eq!(serde_json::to_value(ExportFormat::Xml).unwrap(), json!("xml"));
    assert_json_eq!(serde_json::to_value(ExportFormat::Spss).unwrap(), json!("spss"));
}

#[test]
fn export_format_display_matches_wire_name() {
    assert_eq!(ExportFormat::Csv2013.to_string(), "csv2013");
    assert_eq!(ExportFormat::Spss.to_string(), "spss");
}

#[test]
fn minimal_export_request_serializes_only_required_fields() {
    let request = ResponseExportRequest::new(ExportFormat::Csv, "SV_abc123");
    let body = serde_json::to_value(&request).unwrap();

    assert_json_eq!(body, json!({"format": "csv", "surveyId": "SV_abc123"}));
}

#[test]
fn populated_options_are_included() {
    let mut request = ResponseExportRequest::new(ExportFormat::Json, "SV_abc123");
    request.last_response_id = Some("R_123".to_string());
    request.limit = Some(100);
    request.included_question_ids = Some(vec!["QID1".to_string(), "QID3".to_string()]);
    request.use_labels = Some(true);
    let body = serde_json::to_value(&request).unwrap();

    assert_json_eq!(
        body,
        json!({
            "format": "json",
            "surveyId": "SV_abc123",
            "lastResponseId": "R_123",
            "limit": 100,
            "includedQuestionIds": ["QID1", "QID3"],
            "useLabels": true
        })
    );
}

#[test]
fn date_filters_serialize_as_rfc3339() {
    let mut request = ResponseExportRequest::new(ExportFormat::Csv, "SV_abc123");
    request.start_date = Some(Utc.with_ymd_and_hms(2016, 1, 1, 12, 30, 0).unwrap());
    let body = serde_json::to_value(&request).unwrap();

    assert_eq!(body["startDate"], json!("2016-01-01T12:30:00Z"));
    assert!(body.get("endDate").is_none());
}

#[test]
fn progress_accessors() {
    let in_progress = ExportProgress::InProgress {
        status: "inProgress".to_string(),
        percent: 42.0,
    };
    assert!(!in_progress.is_complete());
    assert!(!in_progress.is_failure());
    assert_eq!(in_progress.percent(), Some(42.0));
    assert_eq!(in_progress.file(), None);

    let complete = ExportProgress::Complete {
        file: "https://survey.qualtrics.com/API/v3/responseexports/ES_1/file".to_string(),
    };
    assert!(complete.is_complete());
    assert_eq!(
        complete.file(),
        Some("https://survey.qualtrics.com/API/v3/responseexports/ES_1/file")
    );
    assert_eq!(complete.percent(), None);

    let failure = ExportProgress::ServerFailure {
        message: "transport error: connection refused".to_string(),
    };
    assert!(failure.is_failure());
    assert!(!failure.is_complete());
}
