use super::*;

#[test]
fn bad_request_with_field_map_is_validation() {
    let err = ApiError::from_response(400, r#"{"item_sku":["This field is required."],"hsn_code":"blank"}"#);
    let ApiError::Validation(fields) = &err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(fields["item_sku"], vec!["This field is required."]);
    assert_eq!(fields["hsn_code"], vec!["blank"]);
    assert_eq!(err.to_string(), "validation failed for hsn_code, item_sku");
}

#[test]
fn bad_request_with_message_is_server_error() {
    let err = ApiError::from_response(400, r#"{"message":"Invalid image"}"#);
    assert_eq!(err.server_message(), Some("Invalid image"));
    assert!(!matches!(err, ApiError::Validation(_)));
}

#[test]
fn server_error_reads_detail_field() {
    let err = ApiError::from_response(404, r#"{"detail":"Not found."}"#);
    assert_eq!(err, ApiError::Server { status: 404, message: Some("Not found.".to_owned()) });
    assert_eq!(err.to_string(), "Not found.");
}

#[test]
fn server_error_without_json_body_formats_status() {
    let err = ApiError::from_response(502, "<html>bad gateway</html>");
    assert_eq!(err.server_message(), None);
    assert_eq!(err.to_string(), "request failed with status 502");
}

#[test]
fn empty_bad_request_object_is_not_validation() {
    let err = ApiError::from_response(400, "{}");
    assert!(matches!(err, ApiError::Server { status: 400, message: None }));
}

#[test]
fn message_or_prefers_server_message() {
    let with_message = ApiError::Server { status: 500, message: Some("disk full".to_owned()) };
    assert_eq!(with_message.message_or("Failed to submit form"), "disk full");

    let transport = ApiError::Transport("offline".to_owned());
    assert_eq!(transport.message_or("Failed to submit form"), "Failed to submit form");
    assert_eq!(transport.to_string(), "network error: offline");
}
