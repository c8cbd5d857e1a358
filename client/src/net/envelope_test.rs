use super::*;
use serde_json::json;

#[test]
fn unwrap_returns_data_for_successful_envelope() {
    let out = unwrap(json!({ "success": true, "data": { "id": 1 } })).unwrap();
    assert_eq!(out, json!({ "id": 1 }));
}

#[test]
fn unwrap_passes_through_bare_payloads() {
    assert_eq!(unwrap(json!([1, 2])).unwrap(), json!([1, 2]));
    assert_eq!(unwrap(json!({ "id": 3 })).unwrap(), json!({ "id": 3 }));
}

#[test]
fn unwrap_successful_envelope_without_data_is_null() {
    assert_eq!(unwrap(json!({ "success": true })).unwrap(), serde_json::Value::Null);
}

#[test]
fn unwrap_rejects_failed_envelope_with_message() {
    let err = unwrap(json!({ "success": false, "message": "person not found" })).unwrap_err();
    assert_eq!(err, ApiError::Rejected("person not found".to_owned()));
}

#[test]
fn unwrap_rejects_failed_envelope_without_message() {
    let err = unwrap(json!({ "success": false, "message": "  " })).unwrap_err();
    assert_eq!(err, ApiError::Rejected("request rejected".to_owned()));
}

#[test]
fn error_message_checks_known_keys_in_order() {
    assert_eq!(error_message(&json!({ "error": "e", "detail": "d" })), Some("e"));
    assert_eq!(error_message(&json!({ "detail": "d" })), Some("d"));
    assert_eq!(error_message(&json!({ "code": 3 })), None);
}

#[test]
fn decode_reads_typed_payload() {
    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct Row {
        id: i64,
    }
    let row: Row = decode(json!({ "success": true, "data": { "id": 9 } })).unwrap();
    assert_eq!(row, Row { id: 9 });
    let err = decode::<Row>(json!({ "success": true, "data": "nope" })).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn list_items_unwraps_paged_objects() {
    assert_eq!(list_items(json!({ "items": [1], "total": 1 })), json!([1]));
    assert_eq!(list_items(json!([2])), json!([2]));
    assert_eq!(list_items(json!({ "total": 0 })), json!({ "total": 0 }));
}

#[test]
fn status_error_prefers_body_message() {
    let err = ApiError::from_status(422, r#"{"detail":"name required"}"#);
    assert_eq!(err, ApiError::Status { status: 422, message: "name required".to_owned() });
    let err = ApiError::from_status(503, "");
    assert_eq!(err, ApiError::Status { status: 503, message: "service unavailable".to_owned() });
    assert!(ApiError::from_status(404, "missing").is_not_found());
}
