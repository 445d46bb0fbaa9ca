//! Problem service — create, list, and cascade delete.
//!
//! DESIGN
//! ======
//! Problems are plain rows in the hosted table store; the server holds no
//! copy of them. Create validates the title, mints the row, and inserts
//! it. List re-reads the whole table and orders it oldest first. Delete
//! removes the problem row and every factor row referencing it.
//!
//! ERROR HANDLING
//! ==============
//! The two deletes in the cascade are separate store calls with no
//! transaction around them. Both are always attempted, so a failed
//! problem delete cannot leave the factor rows untouched as well; the
//! first failure is reported after both have run.

use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use records::{NewProblem, Problem, ValidationError};

use crate::store::{StoreError, TABLE_FACTORS, TABLE_PROBLEMS, TableStore};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProblemError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("table store error: {0}")]
    Store(#[from] StoreError),
    #[error("malformed problem row: {0}")]
    Decode(String),
}

// =============================================================================
// CRUD
// =============================================================================

/// Create a new problem row.
///
/// # Errors
///
/// Returns a validation error for a blank title, or a store error if the
/// insert fails.
pub async fn create_problem(store: &dyn TableStore, new: NewProblem) -> Result<Problem, ProblemError> {
    records::validate_problem_name(&new.name)?;

    let problem = Problem::new(new, OffsetDateTime::now_utc());
    let row = serde_json::to_value(&problem).map_err(|e| ProblemError::Decode(e.to_string()))?;
    store.insert(TABLE_PROBLEMS, row).await?;

    info!(problem_id = %problem.id, "created problem");
    Ok(problem)
}

/// List all problems, oldest first. Ties on creation time break by id so
/// the order is stable across fetches.
///
/// # Errors
///
/// Returns a store error if the fetch fails, or a decode error if a row
/// does not match the problem shape.
pub async fn list_problems(store: &dyn TableStore) -> Result<Vec<Problem>, ProblemError> {
    let rows = store.select_all(TABLE_PROBLEMS).await?;

    let mut problems = rows
        .into_iter()
        .map(|row| serde_json::from_value::<Problem>(row).map_err(|e| ProblemError::Decode(e.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    problems.sort_by_key(|problem| (problem.created_at, problem.id));
    Ok(problems)
}

/// Delete a problem row and every factor row referencing it.
///
/// Deleting an id with no matching rows succeeds; the store treats an
/// empty match as a no-op.
///
/// # Errors
///
/// Returns the first store error after both deletes have been attempted.
pub async fn delete_problem(store: &dyn TableStore, problem_id: Uuid) -> Result<(), ProblemError> {
    let id = problem_id.to_string();

    // A factor row must not outlive its problem, so the dependent delete
    // runs even when the problem delete fails.
    let problem_result = store.delete_eq(TABLE_PROBLEMS, "id", &id).await;
    let factor_result = store.delete_eq(TABLE_FACTORS, "problem_id", &id).await;

    problem_result?;
    factor_result?;

    info!(%problem_id, "deleted problem and dependent factors");
    Ok(())
}

#[cfg(test)]
#[path = "problem_test.rs"]
mod tests;
