use super::*;
use crate::state::test_helpers;
use crate::store::MemoryStore;
use records::FactorValue;
use time::macros::datetime;
use uuid::Uuid;

#[tokio::test]
async fn create_factor_writes_binary_row() {
    let store = MemoryStore::new();
    let problem_id = Uuid::new_v4();

    let factor = create_factor(
        &store,
        NewFactor {
            problem_id,
            name: "Caffeine after noon".to_owned(),
            value: FactorValue::Binary(true),
        },
    )
    .await
    .expect("create");

    assert_eq!(factor.problem_id, problem_id);
    assert_eq!(factor.value(), FactorValue::Binary(true));

    let rows = store.select_all(TABLE_FACTORS).await.expect("select");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["is_scale"], serde_json::json!(false));
    assert_eq!(rows[0]["value_binary"], serde_json::json!(true));
    assert_eq!(rows[0]["value_scale"], serde_json::json!(0));
}

#[tokio::test]
async fn create_factor_writes_scale_row() {
    let store = MemoryStore::new();

    let factor = create_factor(
        &store,
        NewFactor {
            problem_id: Uuid::new_v4(),
            name: "Hours of sleep".to_owned(),
            value: FactorValue::Scale(7),
        },
    )
    .await
    .expect("create");

    assert_eq!(factor.value(), FactorValue::Scale(7));

    let rows = store.select_all(TABLE_FACTORS).await.expect("select");
    assert_eq!(rows[0]["is_scale"], serde_json::json!(true));
    assert_eq!(rows[0]["value_scale"], serde_json::json!(7));
    assert_eq!(rows[0]["value_binary"], serde_json::json!(false));
}

#[tokio::test]
async fn create_factor_allows_empty_name() {
    let store = MemoryStore::new();

    let factor = create_factor(
        &store,
        NewFactor {
            problem_id: Uuid::new_v4(),
            name: String::new(),
            value: FactorValue::Binary(false),
        },
    )
    .await
    .expect("create");

    assert_eq!(factor.name, "");
}

#[tokio::test]
async fn create_factor_does_not_require_existing_problem() {
    // The hosted store enforces no foreign key over REST; an orphan insert
    // succeeds and simply never renders under any listed problem.
    let store = MemoryStore::new();

    create_factor(
        &store,
        NewFactor {
            problem_id: Uuid::new_v4(),
            name: "Orphan".to_owned(),
            value: FactorValue::Binary(true),
        },
    )
    .await
    .expect("create");
}

#[tokio::test]
async fn list_factors_orders_oldest_first() {
    let state = test_helpers::test_app_state();
    let problem_id = Uuid::new_v4();

    let older = records::Factor::new(
        NewFactor {
            problem_id,
            name: "Older".to_owned(),
            value: FactorValue::Binary(true),
        },
        datetime!(2024-01-01 08:00 UTC),
    );
    let newer = records::Factor::new(
        NewFactor {
            problem_id,
            name: "Newer".to_owned(),
            value: FactorValue::Scale(2),
        },
        datetime!(2024-01-02 08:00 UTC),
    );

    test_helpers::seed_factor(&state, &newer).await;
    test_helpers::seed_factor(&state, &older).await;

    let listed = list_factors(state.store.as_ref()).await.expect("list");
    let names: Vec<&str> = listed.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Older", "Newer"]);
}

#[tokio::test]
async fn list_factors_returns_rows_for_every_problem() {
    let state = test_helpers::test_app_state();

    let factor_a = test_helpers::dummy_factor(Uuid::new_v4(), "A", FactorValue::Binary(true));
    let factor_b = test_helpers::dummy_factor(Uuid::new_v4(), "B", FactorValue::Scale(9));
    test_helpers::seed_factor(&state, &factor_a).await;
    test_helpers::seed_factor(&state, &factor_b).await;

    let listed = list_factors(state.store.as_ref()).await.expect("list");
    assert_eq!(listed.len(), 2);
}

#[tokio::test]
async fn list_factors_fails_on_malformed_row() {
    let state = test_helpers::test_app_state();
    state
        .store
        .insert(TABLE_FACTORS, serde_json::json!({"problem_id": 12}))
        .await
        .expect("insert");

    let err = list_factors(state.store.as_ref()).await.expect_err("must fail");
    assert!(matches!(err, FactorError::Decode(_)));
}
