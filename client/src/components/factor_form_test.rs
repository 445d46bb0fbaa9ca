use super::*;

#[test]
fn sanitize_scale_input_keeps_digits_only() {
    assert_eq!(sanitize_scale_input("42"), "42");
    assert_eq!(sanitize_scale_input("12a5"), "125");
    assert_eq!(sanitize_scale_input("abc"), "");
    assert_eq!(sanitize_scale_input(""), "");
}

#[test]
fn parse_scale_input_reads_digits() {
    assert_eq!(parse_scale_input("42"), 42);
    assert_eq!(parse_scale_input("12a5"), 125);
}

#[test]
fn parse_scale_input_falls_back_to_zero() {
    assert_eq!(parse_scale_input(""), 0);
    assert_eq!(parse_scale_input("abc"), 0);
}

#[test]
fn parse_scale_input_treats_overflow_as_zero() {
    assert_eq!(parse_scale_input("99999999999999999999999"), 0);
}
