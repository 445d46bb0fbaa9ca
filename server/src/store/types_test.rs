use super::*;

#[test]
fn store_error_display_includes_status() {
    let err = StoreError::Response { status: 503, body: "unavailable".to_owned() };
    assert_eq!(err.to_string(), "store response error: status 503");
}

#[test]
fn store_error_display_names_missing_key_var() {
    let err = StoreError::MissingApiKey { var: "SERVICE_KEY".to_owned() };
    assert_eq!(err.to_string(), "missing API key: env var SERVICE_KEY not set");
}

#[test]
fn store_error_display_carries_request_detail() {
    let err = StoreError::Request("connection refused".to_owned());
    assert_eq!(err.to_string(), "store request failed: connection refused");
}
