use qualtrics_client::config::Credentials;
use qualtrics_client::model::operation::operation_policy;
use qualtrics_client::model::request::{FormatParam, LegacyRequest};

fn credentials() -> Credentials {
    Credentials {
        user: "test_user".to_string(),
        token: "test_token".to_string(),
    }
}

fn value_of<'a>(query: &'a [(String, String)], key: &str) -> Option<&'a str> {
    query
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[test]
fn embedded_data_flattens_to_bracketed_parameters() {
    let ed = vec![
        ("Zip".to_string(), "12345".to_string()),
        ("SubjectID".to_string(), "CLE1".to_string()),
    ];
    let request = LegacyRequest::new("addRecipient").embedded_data(&ed);
    let query = request.build_query(&credentials(), "2.5");

    assert_eq!(value_of(&query, "ED[Zip]"), Some("12345"));
    assert_eq!(value_of(&query, "ED[SubjectID]"), Some("CLE1"));

    let ed_keys: Vec<&str> = query
        .iter()
        .filter(|(k, _)| k.starts_with("ED["))
        .map(|(k, _)| k.as_str())
        .collect();
    assert_eq!(ed_keys, vec!["ED[Zip]", "ED[SubjectID]"]);
}

#[test]
fn embedded_data_repeated_key_keeps_the_last_value() {
    let ed = vec![
        ("Zip".to_string(), "11111".to_string()),
        ("Zip".to_string(), "22222".to_string()),
    ];
    let request = LegacyRequest::new("addRecipient").embedded_data(&ed);
    let query = request.build_query(&credentials(), "2.5");

    assert_eq!(value_of(&query, "ED[Zip]"), Some("22222"));
    assert_eq!(query.iter().filter(|(k, _)| k == "ED[Zip]").count(), 1);
}

#[test]
fn reserved_parameters_cannot_be_overridden() {
    let request = LegacyRequest::new("createPanel")
        .param("User", "impostor")
        .param("Token", "stolen")
        .param("Request", "deletePanel")
        .param("Format", "XML");
    let query = request.build_query(&credentials(), "2.5");

    assert_eq!(value_of(&query, "User"), Some("test_user"));
    assert_eq!(value_of(&query, "Token"), Some("test_token"));
    assert_eq!(value_of(&query, "Request"), Some("createPanel"));
    assert_eq!(value_of(&query, "Format"), Some("JSON"));
    for key in ["User", "Token", "Request", "Format"] {
        assert_eq!(query.iter().filter(|(k, _)| k == key).count(), 1, "{key}");
    }
}

#[test]
fn version_is_overridable_and_always_a_string() {
    let request = LegacyRequest::new("createPanel");
    let query = request.build_query(&credentials(), "2.5");
    assert_eq!(value_of(&query, "Version"), Some("2.5"));

    let request = LegacyRequest::new("createPanel").version("2.4");
    let query = request.build_query(&credentials(), "2.5");
    assert_eq!(value_of(&query, "Version"), Some("2.4"));
}

#[test]
fn default_format_is_json() {
    let query = LegacyRequest::new("createPanel").build_query(&credentials(), "2.5");
    assert_eq!(value_of(&query, "Format"), Some("JSON"));
}

#[test]
fn xml_operation_omits_the_format_parameter() {
    let query = LegacyRequest::new("getSurvey")
        .param("SurveyID", "SV_123")
        .build_query(&credentials(), "2.5");
    assert_eq!(value_of(&query, "Format"), None);
    assert_eq!(value_of(&query, "Request"), Some("getSurvey"));
}

#[test]
fn custom_format_is_sent_verbatim() {
    let query = LegacyRequest::new("getSurvey")
        .format(FormatParam::Custom("XML".to_string()))
        .build_query(&credentials(), "2.5");
    assert_eq!(value_of(&query, "Format"), Some("XML"));
}

#[test]
fn format_override_detection() {
    assert!(!FormatParam::Json.is_override());
    assert!(FormatParam::Unspecified.is_override());
    assert!(FormatParam::Custom("XML".to_string()).is_override());

    let policy = operation_policy("getSurvey");
    let request = LegacyRequest::new("getSurvey");
    assert!(request.effective_format(&policy).is_override());

    let policy = operation_policy("createPanel");
    let request = LegacyRequest::new("createPanel");
    assert!(!request.effective_format(&policy).is_override());
}

#[test]
fn repeated_parameter_keeps_the_last_value() {
    let query = LegacyRequest::new("createPanel")
        .param("Name", "first")
        .param("Name", "second")
        .build_query(&credentials(), "2.5");

    assert_eq!(value_of(&query, "Name"), Some("second"));
    assert_eq!(query.iter().filter(|(k, _)| k == "Name").count(), 1);
}

#[test]
fn opt_param_skips_absent_values() {
    let query = LegacyRequest::new("getPanel")
        .opt_param("NumberOfRecords", Some(25u64))
        .opt_param("LastRecipientID", None::<&str>)
        .build_query(&credentials(), "2.5");

    assert_eq!(value_of(&query, "NumberOfRecords"), Some("25"));
    assert_eq!(value_of(&query, "LastRecipientID"), None);
}
