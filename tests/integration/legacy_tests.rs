use crate::common;
use mockito::{Matcher, Server, ServerGuard};
use qualtrics_client::prelude::*;

fn mock_operation(
    server: &mut ServerGuard,
    operation: &str,
    status: usize,
    body: &str,
) -> mockito::Mock {
    server
        .mock("GET", common::RESEARCH_SUITE_PATH)
        .match_query(Matcher::UrlEncoded("Request".into(), operation.into()))
        .with_status(status)
        .with_header("Content-Type", "application/json")
        .with_body(body)
        .create()
}

#[test]
fn success_envelope_yields_the_parsed_body() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", common::RESEARCH_SUITE_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("User".into(), "test_user".into()),
            Matcher::UrlEncoded("Token".into(), "test_token".into()),
            Matcher::UrlEncoded("Format".into(), "JSON".into()),
            Matcher::UrlEncoded("Version".into(), "2.5".into()),
            Matcher::UrlEncoded("Request".into(), "createPanel".into()),
            Matcher::UrlEncoded("LibraryID".into(), "GR_123".into()),
            Matcher::UrlEncoded("Name".into(), "Spring cohort".into()),
        ]))
        .with_status(200)
        .with_body(common::success_body(r#"{"PanelID":"ML_5yIfnFP0sGHfNKB"}"#))
        .create();

    let client = common::test_client(&server.url());
    let panel_id = client.create_panel("GR_123", "Spring cohort").unwrap();

    assert_eq!(panel_id, "ML_5yIfnFP0sGHfNKB");
    mock.assert();
}

#[test]
fn missing_envelope_is_a_protocol_violation() {
    let mut server = Server::new();
    mock_operation(
        &mut server,
        "createPanel",
        200,
        r#"{"Result":{"PanelID":"ML_123"}}"#,
    );

    let client = common::test_client(&server.url());
    let error = client.create_panel("GR_123", "No envelope").unwrap_err();

    match error {
        AppError::ProtocolViolation(msg) => assert!(msg.contains("Meta")),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn envelope_exempt_operation_succeeds_without_meta() {
    let mut server = Server::new();
    mock_operation(
        &mut server,
        "getPanel",
        200,
        r#"[{"RecipientID":"MLRP_1","Email":"pyq@example.com"}]"#,
    );

    let client = common::test_client(&server.url());
    let members = client
        .get_panel("GR_123", "ML_456", &PanelExportOptions::default())
        .unwrap();

    assert_eq!(members.as_array().unwrap().len(), 1);
    assert_eq!(members[0]["RecipientID"], "MLRP_1");
}

#[test]
fn exempt_operation_with_error_envelope_still_fails() {
    let mut server = Server::new();
    mock_operation(
        &mut server,
        "getPanel",
        200,
        r#"{"Meta":{"Status":"Error","ErrorMessage":"Invalid Panel ID"}}"#,
    );

    let client = common::test_client(&server.url());
    let error = client
        .get_panel("GR_123", "ML_bogus", &PanelExportOptions::default())
        .unwrap_err();

    match error {
        AppError::Api(msg) => assert_eq!(msg, "Invalid Panel ID"),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn envelope_without_status_is_a_protocol_violation() {
    let mut server = Server::new();
    mock_operation(&mut server, "createPanel", 200, r#"{"Meta":{"Debug":""}}"#);

    let client = common::test_client(&server.url());
    let error = client.create_panel("GR_123", "No status").unwrap_err();

    match error {
        AppError::ProtocolViolation(msg) => assert!(msg.contains("Status")),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn error_envelope_carries_the_platform_message() {
    let mut server = Server::new();
    mock_operation(
        &mut server,
        "createPanel",
        200,
        r#"{"Meta":{"Status":"Error","ErrorMessage":"Incorrect Username or Password"}}"#,
    );

    let client = common::test_client(&server.url());
    let error = client.create_panel("GR_123", "Bad auth").unwrap_err();

    match error {
        AppError::Api(msg) => assert_eq!(msg, "Incorrect Username or Password"),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn http_403_is_forbidden_regardless_of_body() {
    let mut server = Server::new();
    mock_operation(
        &mut server,
        "createPanel",
        403,
        &common::success_body(r#"{"PanelID":"ML_123"}"#),
    );

    let client = common::test_client(&server.url());
    let error = client.create_panel("GR_123", "Forbidden").unwrap_err();

    assert!(matches!(error, AppError::Forbidden));
}

#[test]
fn http_401_on_survey_retrieval_is_unauthorized() {
    let mut server = Server::new();
    mock_operation(&mut server, "getSurvey", 401, "<xml/>");

    let client = common::test_client(&server.url());
    let error = client.get_survey("SV_123").unwrap_err();

    assert!(matches!(error, AppError::Unauthorized));
}

#[test]
fn http_401_on_other_operations_falls_through_to_parsing() {
    let mut server = Server::new();
    mock_operation(
        &mut server,
        "createPanel",
        401,
        &common::success_body(r#"{"PanelID":"ML_123"}"#),
    );

    let client = common::test_client(&server.url());
    let panel_id = client.create_panel("GR_123", "Odd status").unwrap();

    assert_eq!(panel_id, "ML_123");
}

#[test]
fn non_json_body_is_a_malformed_response() {
    let mut server = Server::new();
    mock_operation(&mut server, "createPanel", 200, "<html>Bad gateway</html>");

    let client = common::test_client(&server.url());
    let error = client.create_panel("GR_123", "Not json").unwrap_err();

    match error {
        AppError::MalformedResponse(msg) => assert!(msg.contains("JSON")),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn xml_operation_returns_the_raw_document() {
    let document = r#"<?xml version="1.0" encoding="UTF-8"?><SurveyDefinition/>"#;
    let mut server = Server::new();
    mock_operation(&mut server, "getSurvey", 200, document);

    let client = common::test_client(&server.url());
    let survey = client.get_survey("SV_123").unwrap();

    assert_eq!(survey, document);
}

#[test]
fn response_data_preserves_document_key_order() {
    let mut server = Server::new();
    mock_operation(
        &mut server,
        "getLegacyResponseData",
        200,
        r#"{"R_3":{"Q1":1},"R_1":{"Q1":2},"R_2":{"Q1":3}}"#,
    );

    let client = common::test_client(&server.url());
    let responses = client
        .get_legacy_response_data("SV_123", &ResponseDataOptions::default())
        .unwrap();

    let keys: Vec<&String> = responses.keys().collect();
    assert_eq!(keys, vec!["R_3", "R_1", "R_2"]);
}

#[test]
fn connection_failure_is_a_transport_error() {
    // Nothing listens on the discard port.
    let client = common::test_client("http://127.0.0.1:9");
    let error = client.create_panel("GR_123", "Unreachable").unwrap_err();

    assert!(matches!(error, AppError::Transport(_)));
}

#[test]
fn raw_body_wins_over_file_attachments() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", common::RESEARCH_SUITE_PATH)
        .match_query(Matcher::UrlEncoded("Request".into(), "importPanel".into()))
        .match_body(Matcher::Exact("Email\npyq@example.com\n".to_string()))
        .with_status(200)
        .with_body(common::success_body(r#"{"PanelID":"ML_123"}"#))
        .create();

    let client = common::test_client(&server.url());
    let request = LegacyRequest::new("importPanel")
        .param("LibraryID", "GR_123")
        .param("Name", "Imported")
        .body("Email\npyq@example.com\n")
        .file("FileContents", "panel.csv", b"ignored".to_vec());
    let response = client.legacy_request(request).unwrap();

    assert_eq!(response.result_str("PanelID").unwrap(), "ML_123");
    mock.assert();
}

#[test]
fn multipart_upload_reaches_the_server() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", common::RESEARCH_SUITE_PATH)
        .match_query(Matcher::UrlEncoded("Request".into(), "importSurvey".into()))
        .match_header(
            "Content-Type",
            Matcher::Regex("multipart/form-data".to_string()),
        )
        .with_status(200)
        .with_body(common::success_body(r#"{"SurveyID":"SV_new"}"#))
        .create();

    let client = common::test_client(&server.url());
    let options = ImportSurveyOptions {
        file_contents: Some(b"survey definition".to_vec()),
        ..ImportSurveyOptions::default()
    };
    let survey_id = client.import_survey("QSF", "Imported survey", &options).unwrap();

    assert_eq!(survey_id, "SV_new");
    mock.assert();
}
