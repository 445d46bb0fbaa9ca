use super::*;

#[test]
fn delete_problem_endpoint_formats_expected_path() {
    let problem_id = Uuid::parse_str("0b24dcd8-58a7-4b8e-9fb9-b11aa00d2e01").expect("sample uuid should parse");
    assert_eq!(
        delete_problem_endpoint(problem_id),
        "/api/problems/0b24dcd8-58a7-4b8e-9fb9-b11aa00d2e01"
    );
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("fetch problems", 500), "fetch problems failed: 500");
    assert_eq!(request_failed_message("delete problem", 404), "delete problem failed: 404");
}
