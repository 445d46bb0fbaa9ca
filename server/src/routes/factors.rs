//! Factor routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use records::{Factor, NewFactor};

use crate::services::factor::{self, FactorError};
use crate::state::AppState;

/// `GET /api/factors` — list all factors across every problem.
pub async fn list_factors(State(state): State<AppState>) -> Result<Json<Vec<Factor>>, StatusCode> {
    let factors = factor::list_factors(state.store.as_ref())
        .await
        .map_err(factor_error_to_status)?;

    Ok(Json(factors))
}

/// `POST /api/factors` — create a factor against a problem.
pub async fn create_factor(
    State(state): State<AppState>,
    Json(body): Json<NewFactor>,
) -> Result<(StatusCode, Json<Factor>), StatusCode> {
    let created = factor::create_factor(state.store.as_ref(), body)
        .await
        .map_err(factor_error_to_status)?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub(crate) fn factor_error_to_status(err: FactorError) -> StatusCode {
    match err {
        FactorError::Store(_) | FactorError::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "factors_test.rs"]
mod tests;
