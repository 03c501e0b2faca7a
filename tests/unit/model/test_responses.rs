use workos_client::model::responses::{ErrorResponse, ListMetadata};

#[test]
fn test_error_response_with_code() {
    let parsed = ErrorResponse::from_body(r#"{"message":"Not allowed","code":"forbidden"}"#);
    assert_eq!(parsed.message.as_deref(), Some("Not allowed"));
    assert_eq!(parsed.code.as_deref(), Some("forbidden"));
    assert!(parsed.errors.is_empty());
}

#[test]
fn test_error_response_empty_object() {
    assert_eq!(ErrorResponse::from_body("{}"), ErrorResponse::default());
}

#[test]
fn test_error_response_non_object_json_kept_as_message() {
    let parsed = ErrorResponse::from_body("[1, 2]");
    assert_eq!(parsed.message.as_deref(), Some("[1, 2]"));
}

#[test]
fn test_list_metadata_missing_cursors() {
    let metadata: ListMetadata = serde_json::from_str(r#"{"after":"org_2"}"#).unwrap();
    assert_eq!(metadata.after.as_deref(), Some("org_2"));
    assert_eq!(metadata.before, None);
}
