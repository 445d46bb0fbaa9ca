//! Factor service — create and list.
//!
//! DESIGN
//! ======
//! Factors are append-only from the UI's point of view: they are created
//! against a selected problem and removed only by the cascade in
//! [`crate::services::problem::delete_problem`]. List re-reads the whole
//! table; the client filters by problem when rendering. No check is made
//! that the referenced problem exists, matching the store's lack of a
//! foreign-key guarantee over its REST surface.

use time::OffsetDateTime;
use tracing::info;

use records::{Factor, NewFactor};

use crate::store::{StoreError, TABLE_FACTORS, TableStore};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum FactorError {
    #[error("table store error: {0}")]
    Store(#[from] StoreError),
    #[error("malformed factor row: {0}")]
    Decode(String),
}

// =============================================================================
// CRUD
// =============================================================================

/// Create a new factor row against a problem.
///
/// # Errors
///
/// Returns a store error if the insert fails.
pub async fn create_factor(store: &dyn TableStore, new: NewFactor) -> Result<Factor, FactorError> {
    let factor = Factor::new(new, OffsetDateTime::now_utc());
    let row = serde_json::to_value(&factor).map_err(|e| FactorError::Decode(e.to_string()))?;
    store.insert(TABLE_FACTORS, row).await?;

    info!(factor_id = %factor.id, problem_id = %factor.problem_id, "created factor");
    Ok(factor)
}

/// List all factors across every problem, oldest first. Ties on creation
/// time break by id so the order is stable across fetches.
///
/// # Errors
///
/// Returns a store error if the fetch fails, or a decode error if a row
/// does not match the factor shape.
pub async fn list_factors(store: &dyn TableStore) -> Result<Vec<Factor>, FactorError> {
    let rows = store.select_all(TABLE_FACTORS).await?;

    let mut factors = rows
        .into_iter()
        .map(|row| serde_json::from_value::<Factor>(row).map_err(|e| FactorError::Decode(e.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    factors.sort_by_key(|factor| (factor.created_at, factor.id));
    Ok(factors)
}

#[cfg(test)]
#[path = "factor_test.rs"]
mod tests;
