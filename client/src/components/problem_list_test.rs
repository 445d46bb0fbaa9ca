use super::*;

use records::{FactorValue, NewFactor, NewProblem};
use time::macros::datetime;
use uuid::Uuid;

#[test]
fn problem_row_label_shows_time_and_fail_outcome() {
    let problem = Problem::new(
        NewProblem {
            name: "Fix bug".to_owned(),
            description: String::new(),
            success: false,
        },
        datetime!(2024-01-01 12:00:00 UTC),
    );

    assert_eq!(
        problem_row_label(&problem),
        "Fix bug (created on Monday, January 1, 2024 at 12:00 PM) (fail)"
    );
}

#[test]
fn problem_row_label_shows_success_outcome() {
    let problem = Problem::new(
        NewProblem {
            name: "Sleep earlier".to_owned(),
            description: String::new(),
            success: true,
        },
        datetime!(2024-07-04 09:07:00 UTC),
    );

    assert_eq!(
        problem_row_label(&problem),
        "Sleep earlier (created on Thursday, July 4, 2024 at 09:07 AM) (success)"
    );
}

#[test]
fn factor_row_label_shows_binary_value() {
    let factor = Factor::new(
        NewFactor {
            problem_id: Uuid::new_v4(),
            name: "slept well".to_owned(),
            value: FactorValue::Binary(true),
        },
        datetime!(2024-01-01 12:00:00 UTC),
    );

    assert_eq!(
        factor_row_label(&factor),
        "slept well: true (created on Monday, January 1, 2024 at 12:00 PM)"
    );
}

#[test]
fn factor_row_label_shows_scale_value() {
    let factor = Factor::new(
        NewFactor {
            problem_id: Uuid::new_v4(),
            name: "stress".to_owned(),
            value: FactorValue::Scale(7),
        },
        datetime!(2024-07-04 23:59:00 UTC),
    );

    assert_eq!(
        factor_row_label(&factor),
        "stress: 7 (created on Thursday, July 4, 2024 at 11:59 PM)"
    );
}
