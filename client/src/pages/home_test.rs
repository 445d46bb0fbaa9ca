use super::*;

#[test]
fn pending_factor_value_uses_binary_when_not_scale() {
    assert_eq!(pending_factor_value(false, true, "7"), FactorValue::Binary(true));
    assert_eq!(pending_factor_value(false, false, ""), FactorValue::Binary(false));
}

#[test]
fn pending_factor_value_parses_scale_input() {
    assert_eq!(pending_factor_value(true, true, "7"), FactorValue::Scale(7));
    assert_eq!(pending_factor_value(true, false, "12a5"), FactorValue::Scale(125));
}

#[test]
fn pending_factor_value_scale_defaults_to_zero() {
    assert_eq!(pending_factor_value(true, true, ""), FactorValue::Scale(0));
    assert_eq!(pending_factor_value(true, true, "abc"), FactorValue::Scale(0));
}

#[test]
fn validation_prompts_match_the_forms() {
    assert_eq!(PROMPT_EMPTY_TITLE, "Enter a problem title!");
    assert_eq!(PROMPT_NO_SELECTION_FACTOR, "Select a problem for your factor!");
    assert_eq!(PROMPT_NO_SELECTION_DELETE, "Select a problem to delete!");
}
