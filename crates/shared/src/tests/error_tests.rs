use super::{ApiErrorPayload, ApiException};

#[test]
fn prefers_error_field_over_detail() {
    let exc = ApiException::from_body(500, br#"{"error": "rate limited", "detail": "other"}"#);
    assert_eq!(exc.status, 500);
    assert_eq!(exc.message, "rate limited");
}

#[test]
fn accepts_fastapi_detail_string() {
    let exc = ApiException::from_body(
        500,
        br#"{"detail": "Server configuration error: API keys not configured on server."}"#,
    );
    assert_eq!(
        exc.message,
        "Server configuration error: API keys not configured on server."
    );
}

#[test]
fn accepts_fastapi_validation_detail_list() {
    let exc = ApiException::from_body(
        422,
        br#"{"detail": [{"loc": ["body", "topic"], "msg": "field required", "type": "missing"}]}"#,
    );
    assert_eq!(exc.message, "field required");
}

#[test]
fn falls_back_to_status_message_for_unparseable_body() {
    let exc = ApiException::from_body(502, b"<html>Bad Gateway</html>");
    assert_eq!(exc.message, "HTTP error! status: 502");
}

#[test]
fn blank_error_field_falls_back_to_status_message() {
    let exc = ApiException::from_body(500, br#"{"error": "   "}"#);
    assert_eq!(exc.message, "HTTP error! status: 500");
}

#[test]
fn payload_without_any_message_yields_none() {
    let payload: ApiErrorPayload =
        serde_json::from_str(r#"{"detail": [{"loc": ["body"]}]}"#).expect("decode");
    assert_eq!(payload.message(), None);
    assert_eq!(ApiErrorPayload::default().message(), None);
}
