use super::*;
use crate::state::test_helpers;
use records::{FactorValue, ValidationError};
use crate::store::StoreError;

fn body(name: &str) -> Json<NewProblem> {
    Json(NewProblem {
        name: name.to_owned(),
        description: "from the form".to_owned(),
        success: false,
    })
}

#[test]
fn problem_error_to_status_maps_invalid_to_bad_request() {
    let err = ProblemError::Invalid(ValidationError::EmptyProblemName);
    assert_eq!(problem_error_to_status(err), StatusCode::BAD_REQUEST);
}

#[test]
fn problem_error_to_status_maps_store_to_internal_error() {
    let err = ProblemError::Store(StoreError::Request("connection reset".to_owned()));
    assert_eq!(problem_error_to_status(err), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn problem_error_to_status_maps_decode_to_internal_error() {
    let err = ProblemError::Decode("missing field".to_owned());
    assert_eq!(problem_error_to_status(err), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn create_problem_returns_created_with_row() {
    let state = test_helpers::test_app_state();

    let (status, Json(created)) = create_problem(State(state.clone()), body("Sleep earlier"))
        .await
        .expect("create");

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.name, "Sleep earlier");

    let Json(listed) = list_problems(State(state)).await.expect("list");
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn create_problem_with_blank_title_is_bad_request() {
    let state = test_helpers::test_app_state();

    let err = create_problem(State(state.clone()), body("  "))
        .await
        .expect_err("must fail");
    assert_eq!(err, StatusCode::BAD_REQUEST);

    let Json(listed) = list_problems(State(state)).await.expect("list");
    assert!(listed.is_empty());
}

#[tokio::test]
async fn list_problems_starts_empty() {
    let state = test_helpers::test_app_state();
    let Json(listed) = list_problems(State(state)).await.expect("list");
    assert!(listed.is_empty());
}

#[tokio::test]
async fn delete_problem_cascades_to_factors_and_acks() {
    let state = test_helpers::test_app_state();

    let problem = test_helpers::dummy_problem("Doomed");
    test_helpers::seed_problem(&state, &problem).await;
    let factor = test_helpers::dummy_factor(problem.id, "Attached", FactorValue::Binary(true));
    test_helpers::seed_factor(&state, &factor).await;

    let Json(ack) = delete_problem(State(state.clone()), Path(problem.id))
        .await
        .expect("delete");
    assert_eq!(ack, serde_json::json!({ "ok": true }));

    let Json(problems) = list_problems(State(state.clone())).await.expect("list problems");
    assert!(problems.is_empty());

    let Json(factors) = crate::routes::factors::list_factors(State(state))
        .await
        .expect("list factors");
    assert!(factors.is_empty());
}

#[tokio::test]
async fn delete_problem_with_unknown_id_still_acks() {
    let state = test_helpers::test_app_state();

    let Json(ack) = delete_problem(State(state), Path(uuid::Uuid::new_v4()))
        .await
        .expect("delete");
    assert_eq!(ack, serde_json::json!({ "ok": true }));
}
