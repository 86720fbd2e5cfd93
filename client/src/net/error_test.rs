use super::*;

// =============================================================
// error_message
// =============================================================

#[test]
fn top_level_validation_list_is_flattened() {
    let body = r#"[{"loc":["body","price"],"msg":"must be positive"}]"#;
    assert_eq!(error_message(body, "fallback"), "price: must be positive");
}

#[test]
fn detail_validation_list_joins_with_commas() {
    let body = r#"{"detail":[
        {"loc":["body","price"],"msg":"must be positive","type":"value_error"},
        {"loc":["body","departure_time"],"msg":"invalid time format"}
    ]}"#;
    assert_eq!(
        error_message(body, "fallback"),
        "price: must be positive, departure_time: invalid time format"
    );
}

#[test]
fn single_segment_loc_uses_first_segment() {
    let body = r#"[{"loc":["body"],"msg":"field required"}]"#;
    assert_eq!(error_message(body, "x"), "body: field required");
}

#[test]
fn missing_loc_uses_generic_field_name() {
    let body = r#"[{"msg":"bad"}]"#;
    assert_eq!(error_message(body, "x"), "field: bad");
}

#[test]
fn numeric_loc_segment_is_rendered() {
    let body = r#"[{"loc":["body",0],"msg":"bad seat"}]"#;
    assert_eq!(error_message(body, "x"), "0: bad seat");
}

#[test]
fn string_detail_is_returned_verbatim() {
    let body = r#"{"detail":"Not enough seats available"}"#;
    assert_eq!(error_message(body, "Booking failed"), "Not enough seats available");
}

#[test]
fn message_field_is_used_when_detail_absent() {
    let body = r#"{"message":"Booking ID 9 not found."}"#;
    assert_eq!(error_message(body, "Unknown error"), "Booking ID 9 not found.");
}

#[test]
fn non_json_body_falls_back() {
    assert_eq!(error_message("<html>502</html>", "Booking failed"), "Booking failed");
}

#[test]
fn empty_object_falls_back() {
    assert_eq!(error_message("{}", "Failed to create trip"), "Failed to create trip");
}

#[test]
fn empty_validation_list_falls_back() {
    assert_eq!(error_message("[]", "fallback"), "fallback");
    assert_eq!(error_message(r#"{"detail":[]}"#, "fallback"), "fallback");
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn server_error_displays_extracted_message() {
    let err = ApiError::from_body(400, r#"{"detail":"Username already exists"}"#, "register failed");
    assert_eq!(err.to_string(), "Username already exists");
    assert!(matches!(err, ApiError::Server { status: 400, .. }));
}

#[test]
fn login_required_has_stable_message() {
    assert_eq!(ApiError::LoginRequired.to_string(), "session expired, please sign in again");
}
