//! Problem routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

use records::{NewProblem, Problem};

use crate::services::problem::{self, ProblemError};
use crate::state::AppState;

/// `GET /api/problems` — list all problems, oldest first.
pub async fn list_problems(State(state): State<AppState>) -> Result<Json<Vec<Problem>>, StatusCode> {
    let problems = problem::list_problems(state.store.as_ref())
        .await
        .map_err(problem_error_to_status)?;

    Ok(Json(problems))
}

/// `POST /api/problems` — create a problem.
pub async fn create_problem(
    State(state): State<AppState>,
    Json(body): Json<NewProblem>,
) -> Result<(StatusCode, Json<Problem>), StatusCode> {
    let created = problem::create_problem(state.store.as_ref(), body)
        .await
        .map_err(problem_error_to_status)?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// `DELETE /api/problems/{id}` — delete a problem and its factors.
pub async fn delete_problem(
    State(state): State<AppState>,
    Path(problem_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    problem::delete_problem(state.store.as_ref(), problem_id)
        .await
        .map_err(problem_error_to_status)?;

    Ok(Json(serde_json::json!({ "ok": true })))
}

pub(crate) fn problem_error_to_status(err: ProblemError) -> StatusCode {
    match err {
        ProblemError::Invalid(_) => StatusCode::BAD_REQUEST,
        ProblemError::Store(_) | ProblemError::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "problems_test.rs"]
mod tests;
