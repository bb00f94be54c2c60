use qualtrics_client::error::AppError;
use qualtrics_client::model::operation::{Product, ResponseKind, operation_policy};
use std::str::FromStr;

#[test]
fn response_data_operation_is_envelope_exempt_and_ordered() {
    let policy = operation_policy("getLegacyResponseData");
    assert!(!policy.expects_envelope);
    assert_eq!(policy.response_kind, ResponseKind::OrderedJson);
    assert_eq!(policy.product, Product::ResearchSuite);
}

#[test]
fn panel_export_operation_is_envelope_exempt() {
    let policy = operation_policy("getPanel");
    assert!(!policy.expects_envelope);
    assert_eq!(policy.response_kind, ResponseKind::Json);
}

#[test]
fn survey_retrieval_operation_answers_xml() {
    let policy = operation_policy("getSurvey");
    assert!(policy.expects_envelope);
    assert_eq!(policy.response_kind, ResponseKind::Xml);
}

#[test]
fn contact_operations_target_the_contacts_product() {
    for operation in ["getListContacts", "importContacts", "removeContact"] {
        let policy = operation_policy(operation);
        assert_eq!(policy.product, Product::Contacts, "{operation}");
    }
    assert!(!operation_policy("getListContacts").expects_envelope);
    assert!(operation_policy("removeContact").expects_envelope);
}

#[test]
fn unknown_operations_require_the_envelope() {
    let policy = operation_policy("someFutureOperation");
    assert!(policy.expects_envelope);
    assert_eq!(policy.product, Product::ResearchSuite);
    assert_eq!(policy.response_kind, ResponseKind::Json);
}

#[test]
fn product_selector_parsing() {
    assert_eq!(Product::from_str("RS").unwrap(), Product::ResearchSuite);
    assert_eq!(Product::from_str("TA").unwrap(), Product::Contacts);
    assert_eq!(Product::ResearchSuite.as_str(), "RS");
    assert_eq!(Product::Contacts.to_string(), "TA");
}

#[test]
fn unrecognized_product_selector_is_rejected() {
    let error = Product::from_str("CX").unwrap_err();
    match error {
        AppError::UnsupportedProduct(selector) => assert_eq!(selector, "CX"),
        other => panic!("Unexpected error: {other:?}"),
    }
}
