//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the table-store handle and nothing else: the server keeps no
//! row cache, so every list read is a fresh full-table fetch and every
//! write goes straight through to the store.

use std::sync::Arc;

use crate::store::TableStore;

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the store handle is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TableStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self { store }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::store::{MemoryStore, TABLE_FACTORS, TABLE_PROBLEMS};
    use records::{Factor, FactorValue, NewFactor, NewProblem, Problem};
    use time::OffsetDateTime;
    use uuid::Uuid;

    /// Create a test `AppState` backed by an empty in-memory store.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(Arc::new(MemoryStore::new()))
    }

    /// Create a dummy problem row created "now".
    #[must_use]
    pub fn dummy_problem(name: &str) -> Problem {
        dummy_problem_at(name, OffsetDateTime::now_utc())
    }

    /// Create a dummy problem row with a fixed creation time.
    #[must_use]
    pub fn dummy_problem_at(name: &str, created_at: OffsetDateTime) -> Problem {
        Problem::new(
            NewProblem {
                name: name.to_owned(),
                description: "test description".to_owned(),
                success: false,
            },
            created_at,
        )
    }

    /// Create a dummy factor row attached to `problem_id`.
    #[must_use]
    pub fn dummy_factor(problem_id: Uuid, name: &str, value: FactorValue) -> Factor {
        Factor::new(
            NewFactor { problem_id, name: name.to_owned(), value },
            OffsetDateTime::now_utc(),
        )
    }

    /// Insert a problem row into the state's store.
    pub async fn seed_problem(state: &AppState, problem: &Problem) {
        let row = serde_json::to_value(problem).expect("serialize problem");
        state.store.insert(TABLE_PROBLEMS, row).await.expect("insert problem");
    }

    /// Insert a factor row into the state's store.
    pub async fn seed_factor(state: &AppState, factor: &Factor) {
        let row = serde_json::to_value(factor).expect("serialize factor");
        state.store.insert(TABLE_FACTORS, row).await.expect("insert factor");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{TABLE_FACTORS, TABLE_PROBLEMS};

    #[tokio::test]
    async fn test_app_state_starts_with_empty_tables() {
        let state = test_helpers::test_app_state();
        assert!(state.store.select_all(TABLE_PROBLEMS).await.unwrap().is_empty());
        assert!(state.store.select_all(TABLE_FACTORS).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn app_state_clones_share_the_store() {
        let state = test_helpers::test_app_state();
        let clone = state.clone();

        let problem = test_helpers::dummy_problem("Shared");
        test_helpers::seed_problem(&clone, &problem).await;

        let rows = state.store.select_all(TABLE_PROBLEMS).await.unwrap();
        assert_eq!(rows.len(), 1);
    }
}
